use dom::{DomError, Id};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FlextError {
    /// The id does not name a node of the document.
    UnknownElement(Id),
    /// The node exists but is not an element.
    NotAnElement(Id),
    InvalidOptions(String),
}

impl fmt::Display for FlextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlextError::UnknownElement(id) => write!(f, "no element with id {} in document", id.0),
            FlextError::NotAnElement(id) => write!(f, "node {} is not an element", id.0),
            FlextError::InvalidOptions(msg) => write!(f, "invalid flext options: {msg}"),
        }
    }
}

impl std::error::Error for FlextError {}

impl From<DomError> for FlextError {
    fn from(err: DomError) -> Self {
        match err {
            DomError::UnknownNode(id) => FlextError::UnknownElement(id),
            DomError::WrongNodeKind(id)
            | DomError::InvalidParent(id)
            | DomError::CycleDetected { child: id, .. } => FlextError::NotAnElement(id),
        }
    }
}
