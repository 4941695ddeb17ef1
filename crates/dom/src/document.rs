use crate::types::{ElementData, Id, NodeKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    UnknownNode(Id),
    WrongNodeKind(Id),
    InvalidParent(Id),
    CycleDetected { parent: Id, child: Id },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::UnknownNode(id) => write!(f, "unknown node {}", id.0),
            DomError::WrongNodeKind(id) => write!(f, "node {} is not an element", id.0),
            DomError::InvalidParent(id) => write!(f, "node {} cannot be attached there", id.0),
            DomError::CycleDetected { parent, child } => {
                write!(f, "appending {} under {} would create a cycle", child.0, parent.0)
            }
        }
    }
}

impl std::error::Error for DomError {}

struct NodeRecord {
    kind: NodeKind,
    parent: Option<Id>,
    children: Vec<Id>,
}

/// A single document. Node ids index the arena; `Id::DOCUMENT` is the root.
pub struct Document {
    nodes: Vec<NodeRecord>,
    submissions: Vec<Id>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            submissions: Vec::new(),
        }
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, name: &str) -> Id {
        let id = Id(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            kind: NodeKind::Element(ElementData::new(name)),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn append_child(&mut self, parent: Id, child: Id) -> Result<(), DomError> {
        self.ensure_live(parent)?;
        self.ensure_live(child)?;
        if parent == child || self.is_ancestor_of(child, parent) {
            return Err(DomError::CycleDetected { parent, child });
        }
        if child == Id::DOCUMENT {
            return Err(DomError::InvalidParent(child));
        }
        if self.nodes[child.0 as usize].parent.is_some() {
            return Err(DomError::InvalidParent(child));
        }
        self.nodes[parent.0 as usize].children.push(child);
        self.nodes[child.0 as usize].parent = Some(parent);
        Ok(())
    }

    /// Creates an element and appends it under `parent` in one step.
    pub fn append_element(&mut self, parent: Id, name: &str) -> Result<Id, DomError> {
        self.ensure_live(parent)?;
        let id = self.create_element(name);
        self.append_child(parent, id)?;
        Ok(id)
    }

    pub fn contains(&self, id: Id) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    /// Whether the node is reachable from the document root.
    pub fn is_connected(&self, id: Id) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == Id::DOCUMENT {
                return true;
            }
            current = self.nodes.get(node.0 as usize).and_then(|n| n.parent);
        }
        false
    }

    pub fn element(&self, id: Id) -> Option<&ElementData> {
        match self.nodes.get(id.0 as usize).map(|n| &n.kind) {
            Some(NodeKind::Element(data)) => Some(data),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: Id) -> Option<&mut ElementData> {
        match self.nodes.get_mut(id.0 as usize).map(|n| &mut n.kind) {
            Some(NodeKind::Element(data)) => Some(data),
            _ => None,
        }
    }

    /// Like [`Document::element_mut`] but distinguishes a missing node from a
    /// non-element node.
    pub fn try_element_mut(&mut self, id: Id) -> Result<&mut ElementData, DomError> {
        self.ensure_live(id)?;
        self.element_mut(id).ok_or(DomError::WrongNodeKind(id))
    }

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.nodes.get(id.0 as usize).and_then(|n| n.parent)
    }

    /// Parent if it is an element; the document node is not an element parent.
    pub fn parent_element(&self, id: Id) -> Option<Id> {
        self.parent(id).filter(|p| self.element(*p).is_some())
    }

    pub fn children(&self, id: Id) -> &[Id] {
        self.nodes
            .get(id.0 as usize)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Element ids in tree order (pre-order, document root excluded).
    pub fn descendants(&self, root: Id) -> Vec<Id> {
        let mut out = Vec::new();
        let mut stack: Vec<Id> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Queues a submission of `form`. The host drains these with
    /// [`Document::take_submissions`].
    pub fn submit(&mut self, form: Id) -> Result<(), DomError> {
        let el = self.element(form).ok_or(DomError::WrongNodeKind(form))?;
        if el.name != "form" {
            return Err(DomError::WrongNodeKind(form));
        }
        log::trace!(target: "dom", "submit form {}", form.0);
        self.submissions.push(form);
        Ok(())
    }

    pub fn submissions(&self) -> &[Id] {
        &self.submissions
    }

    pub fn take_submissions(&mut self) -> Vec<Id> {
        std::mem::take(&mut self.submissions)
    }

    fn ensure_live(&self, id: Id) -> Result<(), DomError> {
        if !self.contains(id) {
            return Err(DomError::UnknownNode(id));
        }
        Ok(())
    }

    fn is_ancestor_of(&self, ancestor: Id, node: Id) -> bool {
        let mut current = self.parent(node);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_builds_parent_links() {
        let mut doc = Document::new();
        let body = doc.append_element(Id::DOCUMENT, "body").unwrap();
        let div = doc.append_element(body, "DIV").unwrap();

        assert_eq!(doc.parent(div), Some(body));
        assert_eq!(doc.parent_element(div), Some(body));
        assert_eq!(doc.parent_element(body), None);
        assert_eq!(doc.element(div).unwrap().name, "div");
        assert!(doc.is_connected(div));
    }

    #[test]
    fn rejects_cycles_and_reparenting() {
        let mut doc = Document::new();
        let a = doc.append_element(Id::DOCUMENT, "div").unwrap();
        let b = doc.append_element(a, "div").unwrap();

        assert_eq!(
            doc.append_child(b, a),
            Err(DomError::CycleDetected { parent: b, child: a })
        );
        assert_eq!(doc.append_child(Id::DOCUMENT, b), Err(DomError::InvalidParent(b)));
        assert_eq!(doc.append_child(a, Id(99)), Err(DomError::UnknownNode(Id(99))));
    }

    #[test]
    fn detached_elements_are_not_connected() {
        let mut doc = Document::new();
        let loose = doc.create_element("textarea");
        assert!(doc.contains(loose));
        assert!(!doc.is_connected(loose));
    }

    #[test]
    fn descendants_are_in_tree_order() {
        let mut doc = Document::new();
        let a = doc.append_element(Id::DOCUMENT, "div").unwrap();
        let b = doc.append_element(a, "p").unwrap();
        let c = doc.append_element(Id::DOCUMENT, "div").unwrap();
        assert_eq!(doc.descendants(Id::DOCUMENT), vec![a, b, c]);
    }

    #[test]
    fn submit_only_accepts_forms() {
        let mut doc = Document::new();
        let form = doc.append_element(Id::DOCUMENT, "form").unwrap();
        let div = doc.append_element(form, "div").unwrap();

        assert!(doc.submit(form).is_ok());
        assert_eq!(doc.submit(div), Err(DomError::WrongNodeKind(div)));
        assert_eq!(doc.take_submissions(), vec![form]);
        assert!(doc.submissions().is_empty());
    }
}
