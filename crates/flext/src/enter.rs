use dom::{Document, Id, closest, form_by_name};

/// Submits the form enclosing `id`. The form is resolved through the
/// document by its `name`; an unnamed form is submitted directly. Returns
/// the submitted form, or `None` when there is nothing to submit.
pub(crate) fn submit_enclosing_form(doc: &mut Document, id: Id) -> Option<Id> {
    let Some(form) = closest(doc, id, "form") else {
        log::debug!(target: "flext.enter", "element {} has no enclosing form", id.0);
        return None;
    };

    let target = match doc.element(form).and_then(|f| f.attr("name")) {
        Some(name) => form_by_name(doc, name).unwrap_or(form),
        None => form,
    };

    match doc.submit(target) {
        Ok(()) => Some(target),
        Err(err) => {
            log::debug!(target: "flext.enter", "submit failed: {err}");
            None
        }
    }
}
