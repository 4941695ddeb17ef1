use std::collections::HashMap;
use std::time::Duration;

use bus::{DispatchOutcome, DomEvent, EventBus};
use dom::{Document, Id, elements_with_class};

use crate::controller::{Flext, Handler};
use crate::error::FlextError;
use crate::options::FlextOptions;
use crate::parents::AncestorLedger;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControllerId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Listener {
    controller: ControllerId,
    handler: Handler,
}

/// Controllers of one document and the event routing to them.
pub struct FlextPage {
    options: FlextOptions,
    controllers: Vec<Flext>,
    by_element: HashMap<Id, ControllerId>,
    bus: EventBus<Listener>,
    ledger: AncestorLedger,
}

impl FlextPage {
    pub fn new(options: FlextOptions) -> Self {
        Self {
            options,
            controllers: Vec::new(),
            by_element: HashMap::new(),
            bus: EventBus::new(),
            ledger: AncestorLedger::new(),
        }
    }

    pub fn options(&self) -> &FlextOptions {
        &self.options
    }

    /// Attaches every connected `<textarea>` carrying the marker class.
    pub fn scan(&mut self, doc: &mut Document) -> Result<Vec<ControllerId>, FlextError> {
        let targets = elements_with_class(doc, "textarea", &self.options.classes.marker_class);
        log::debug!(target: "flext.page", "scan found {} marked textareas", targets.len());
        self.attach_all(doc, targets)
    }

    pub fn attach_all<I>(&mut self, doc: &mut Document, targets: I) -> Result<Vec<ControllerId>, FlextError>
    where
        I: IntoIterator<Item = Id>,
    {
        targets
            .into_iter()
            .map(|el| self.attach(doc, el))
            .collect()
    }

    /// Attaches with the page options. An element is only ever attached
    /// once; attaching it again returns the existing controller.
    pub fn attach(&mut self, doc: &mut Document, el: Id) -> Result<ControllerId, FlextError> {
        let options = self.options.clone();
        self.attach_with(doc, el, &options)
    }

    pub fn attach_with(
        &mut self,
        doc: &mut Document,
        el: Id,
        options: &FlextOptions,
    ) -> Result<ControllerId, FlextError> {
        if let Some(existing) = self.by_element.get(&el) {
            return Ok(*existing);
        }

        let flext = Flext::new(doc, el, options, &mut self.ledger)?;
        let id = ControllerId(self.controllers.len());
        for (kind, handler) in flext.subscriptions() {
            self.bus.subscribe(
                el,
                kind,
                Listener {
                    controller: id,
                    handler,
                },
            );
        }
        self.controllers.push(flext);
        self.by_element.insert(el, id);
        Ok(id)
    }

    pub fn controller(&self, id: ControllerId) -> Option<&Flext> {
        self.controllers.get(id.0)
    }

    pub fn controller_for(&self, el: Id) -> Option<&Flext> {
        self.by_element.get(&el).and_then(|id| self.controller(*id))
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn ledger(&self) -> &AncestorLedger {
        &self.ledger
    }

    /// Runs every listener registered for the event's target and kind.
    /// The host applies the default action unless the outcome prevents it.
    pub fn dispatch(&mut self, doc: &mut Document, event: &DomEvent) -> DispatchOutcome {
        let listeners = self.bus.listeners(event.target, event.kind).to_vec();
        let mut outcome = DispatchOutcome::default();

        for listener in listeners {
            let Some(flext) = self.controllers.get_mut(listener.controller.0) else {
                continue;
            };
            log::trace!(
                target: "flext.page",
                "{:?} on {} -> {:?}",
                event.kind,
                event.target.0,
                listener.handler
            );
            outcome.merge(flext.handle(listener.handler, doc, event, &mut self.ledger));
        }
        outcome
    }

    /// Advances all running animations. Returns whether any is still running.
    pub fn tick(&mut self, doc: &mut Document, dt: Duration) -> bool {
        let mut running = false;
        for flext in &mut self.controllers {
            running |= flext.tick(doc, dt);
        }
        running
    }
}

impl Default for FlextPage {
    fn default() -> Self {
        Self::new(FlextOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bus::{EventKind, Key};

    fn page_doc() -> (Document, Id, Id) {
        let mut doc = Document::new();
        let form = doc.append_element(Id::DOCUMENT, "form").unwrap();
        let marked = doc.append_element(form, "textarea").unwrap();
        doc.element_mut(marked)
            .unwrap()
            .set_attr("class", "flext growme stopenter entersubmits");
        let manual = doc.append_element(form, "textarea").unwrap();
        doc.element_mut(manual).unwrap().set_attr("class", "stopenter");
        (doc, marked, manual)
    }

    #[test]
    fn scan_attaches_marked_textareas_only() {
        let (mut doc, marked, manual) = page_doc();
        let mut page = FlextPage::default();
        let ids = page.scan(&mut doc).unwrap();

        assert_eq!(ids.len(), 1);
        assert!(page.controller_for(marked).is_some());
        assert!(page.controller_for(manual).is_none());

        page.attach(&mut doc, manual).unwrap();
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn attach_is_idempotent() {
        let (mut doc, marked, _) = page_doc();
        let mut page = FlextPage::default();
        let first = page.attach(&mut doc, marked).unwrap();
        let again = page.attach(&mut doc, marked).unwrap();
        assert_eq!(first, again);
        assert_eq!(page.len(), 1);

        let outcome = page.dispatch(&mut doc, &DomEvent::key_down(marked, Key::Enter));
        assert!(outcome.default_prevented);
        assert_eq!(doc.submissions().len(), 1);
    }

    #[test]
    fn attach_all_stops_at_first_bad_target() {
        let (mut doc, marked, _) = page_doc();
        let mut page = FlextPage::default();
        let err = page
            .attach_all(&mut doc, [marked, Id(500)])
            .unwrap_err();
        assert_eq!(err, FlextError::UnknownElement(Id(500)));
    }

    #[test]
    fn events_for_unwatched_elements_pass_through() {
        let (mut doc, _, manual) = page_doc();
        let mut page = FlextPage::default();
        page.scan(&mut doc).unwrap();
        let outcome = page.dispatch(&mut doc, &DomEvent::key_down(manual, Key::Enter));
        assert_eq!(outcome, DispatchOutcome::default());
        let outcome = page.dispatch(&mut doc, &DomEvent::new(manual, EventKind::Click));
        assert!(!outcome.default_prevented);
    }
}
