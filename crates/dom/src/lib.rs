pub mod dom_utils;
pub mod traverse;

mod document;
mod types;

pub use crate::document::{DomError, Document};
pub use crate::traverse::{Ancestors, closest, elements_with_class, form_by_name};
pub use crate::types::{ElementData, Id, NodeId, NodeKind};
