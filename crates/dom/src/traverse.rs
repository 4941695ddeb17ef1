use crate::{Document, Id};

/// Walks element ancestors from the parent upward, stopping at the document.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<Id>,
}

impl<'a> Ancestors<'a> {
    pub fn new(doc: &'a Document, id: Id) -> Self {
        Self {
            doc,
            next: doc.parent_element(id),
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = Id;

    fn next(&mut self) -> Option<Id> {
        let current = self.next?;
        self.next = self.doc.parent_element(current);
        Some(current)
    }
}

/// Nearest ancestor element with the given tag name.
pub fn closest(doc: &Document, id: Id, tag: &str) -> Option<Id> {
    Ancestors::new(doc, id).find(|a| {
        doc.element(*a)
            .is_some_and(|el| el.name.eq_ignore_ascii_case(tag))
    })
}

/// Connected elements with tag `tag` carrying `class`, in tree order.
pub fn elements_with_class(doc: &Document, tag: &str, class: &str) -> Vec<Id> {
    doc.descendants(Id::DOCUMENT)
        .into_iter()
        .filter(|id| {
            doc.element(*id)
                .is_some_and(|el| el.name.eq_ignore_ascii_case(tag) && el.has_class(class))
        })
        .collect()
}

/// First connected `<form>` whose `name` attribute equals `name`.
pub fn form_by_name(doc: &Document, name: &str) -> Option<Id> {
    doc.descendants(Id::DOCUMENT).into_iter().find(|id| {
        doc.element(*id)
            .is_some_and(|el| el.name == "form" && el.attr("name") == Some(name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestors_stop_at_document() {
        let mut doc = Document::new();
        let body = doc.append_element(Id::DOCUMENT, "body").unwrap();
        let form = doc.append_element(body, "form").unwrap();
        let ta = doc.append_element(form, "textarea").unwrap();

        let chain: Vec<Id> = Ancestors::new(&doc, ta).collect();
        assert_eq!(chain, vec![form, body]);
        assert_eq!(closest(&doc, ta, "FORM"), Some(form));
        assert_eq!(closest(&doc, form, "form"), None);
    }

    #[test]
    fn finds_marked_textareas_only() {
        let mut doc = Document::new();
        let a = doc.append_element(Id::DOCUMENT, "textarea").unwrap();
        doc.element_mut(a).unwrap().set_attr("class", "flext growme");
        let b = doc.append_element(Id::DOCUMENT, "div").unwrap();
        doc.element_mut(b).unwrap().set_attr("class", "flext");
        let c = doc.append_element(b, "textarea").unwrap();
        doc.element_mut(c).unwrap().set_attr("class", "flext");
        let loose = doc.create_element("textarea");
        doc.element_mut(loose).unwrap().set_attr("class", "flext");

        assert_eq!(elements_with_class(&doc, "textarea", "flext"), vec![a, c]);
    }

    #[test]
    fn form_lookup_by_name() {
        let mut doc = Document::new();
        let first = doc.append_element(Id::DOCUMENT, "form").unwrap();
        doc.element_mut(first).unwrap().set_attr("name", "comment");
        let second = doc.append_element(Id::DOCUMENT, "form").unwrap();
        doc.element_mut(second).unwrap().set_attr("name", "comment");

        assert_eq!(form_by_name(&doc, "comment"), Some(first));
        assert_eq!(form_by_name(&doc, "search"), None);
    }
}
