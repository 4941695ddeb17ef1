use std::time::Duration;

use bus::{DispatchOutcome, DomEvent, EventKind, Key};
use dom::{Document, ElementData, Id};

use crate::enter::submit_enclosing_form;
use crate::error::FlextError;
use crate::ghost::GhostText;
use crate::grow::Growth;
use crate::options::FlextOptions;
use crate::parents::AncestorLedger;

/// Features switched on by the element's class list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub auto_grow: bool,
    pub stop_enter: bool,
    pub enter_submits: bool,
    pub ghost_text: bool,
    pub grow_parents: bool,
}

impl Features {
    pub fn from_element(el: &ElementData, options: &FlextOptions) -> Self {
        let names = &options.classes;
        Self {
            auto_grow: el.has_class(&names.grow_class),
            stop_enter: el.has_class(&names.enter_stopped_class),
            enter_submits: el.has_class(&names.enter_submits_class),
            ghost_text: el.has_class(&names.replace_ghost_text_class),
            grow_parents: el.has_class(&names.grow_parents_class),
        }
    }
}

/// The controller methods events can be routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    CheckSize,
    InterceptEnter,
    GhostFocus,
    GhostBlur,
}

/// Behavior controller for one text control.
#[derive(Debug, Clone)]
pub struct Flext {
    el: Id,
    features: Features,
    growth: Option<Growth>,
    ghost: Option<GhostText>,
}

impl Flext {
    /// Inspects the element, prepares the enabled features and runs the
    /// initial size check.
    pub fn new(
        doc: &mut Document,
        el: Id,
        options: &FlextOptions,
        ledger: &mut AncestorLedger,
    ) -> Result<Self, FlextError> {
        let data = doc.try_element_mut(el)?;
        let features = Features::from_element(data, options);

        let growth = features
            .auto_grow
            .then(|| Growth::init(data, options, features.grow_parents));
        let ghost = if features.ghost_text {
            GhostText::from_element(data, &options.classes)
        } else {
            None
        };

        let mut flext = Self {
            el,
            features,
            growth,
            ghost,
        };
        log::debug!(target: "flext.page", "controller for element {}: {:?}", el.0, features);

        if let Some(growth) = flext.growth.as_mut() {
            growth.check_size(doc, el, ledger);
        }
        Ok(flext)
    }

    pub fn element(&self) -> Id {
        self.el
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn growth(&self) -> Option<&Growth> {
        self.growth.as_ref()
    }

    pub fn ghost(&self) -> Option<&GhostText> {
        self.ghost.as_ref()
    }

    /// Event subscriptions this controller needs, in registration order.
    pub fn subscriptions(&self) -> Vec<(EventKind, Handler)> {
        let mut subs = Vec::new();
        if self.growth.is_some() {
            subs.push((EventKind::KeyUp, Handler::CheckSize));
            subs.push((EventKind::Change, Handler::CheckSize));
            subs.push((EventKind::Click, Handler::CheckSize));
        }
        if self.features.stop_enter {
            subs.push((EventKind::KeyDown, Handler::InterceptEnter));
        }
        if self.ghost.is_some() {
            subs.push((EventKind::Focus, Handler::GhostFocus));
            subs.push((EventKind::Blur, Handler::GhostBlur));
        }
        subs
    }

    pub fn handle(
        &mut self,
        handler: Handler,
        doc: &mut Document,
        event: &DomEvent,
        ledger: &mut AncestorLedger,
    ) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        match handler {
            Handler::CheckSize => self.check_size(doc, ledger),
            Handler::InterceptEnter => self.intercept_enter(doc, event, &mut outcome),
            Handler::GhostFocus => self.ghost_focus(doc),
            Handler::GhostBlur => self.ghost_blur(doc),
        }
        outcome
    }

    pub fn check_size(&mut self, doc: &mut Document, ledger: &mut AncestorLedger) {
        if let Some(growth) = self.growth.as_mut() {
            growth.check_size(doc, self.el, ledger);
        }
    }

    fn intercept_enter(&mut self, doc: &mut Document, event: &DomEvent, outcome: &mut DispatchOutcome) {
        if !event.is_key(&Key::Enter) {
            return;
        }
        outcome.stop();
        if self.features.enter_submits {
            submit_enclosing_form(doc, self.el);
        }
    }

    fn ghost_focus(&mut self, doc: &mut Document) {
        if let (Some(ghost), Some(el)) = (self.ghost.as_mut(), doc.element_mut(self.el)) {
            ghost.focus(el);
        }
    }

    fn ghost_blur(&mut self, doc: &mut Document) {
        if let (Some(ghost), Some(el)) = (self.ghost.as_mut(), doc.element_mut(self.el)) {
            ghost.blur(el);
        }
    }

    /// Advances the grow animation. Returns whether it is still running.
    pub fn tick(&mut self, doc: &mut Document, dt: Duration) -> bool {
        self.growth
            .as_mut()
            .is_some_and(|growth| growth.tick(doc, self.el, dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textarea(doc: &mut Document, class: &str) -> Id {
        let id = doc.append_element(Id::DOCUMENT, "textarea").unwrap();
        doc.element_mut(id).unwrap().set_attr("class", class);
        id
    }

    #[test]
    fn features_follow_class_list() {
        let mut doc = Document::new();
        let id = textarea(&mut doc, "flext growme stopenter growparents");
        let flext = Flext::new(&mut doc, id, &FlextOptions::default(), &mut AncestorLedger::new())
            .unwrap();

        let f = flext.features();
        assert!(f.auto_grow && f.stop_enter && f.grow_parents);
        assert!(!f.enter_submits && !f.ghost_text);
        assert_eq!(
            flext.subscriptions(),
            vec![
                (EventKind::KeyUp, Handler::CheckSize),
                (EventKind::Change, Handler::CheckSize),
                (EventKind::Click, Handler::CheckSize),
                (EventKind::KeyDown, Handler::InterceptEnter),
            ]
        );
    }

    #[test]
    fn plain_element_gets_no_subscriptions() {
        let mut doc = Document::new();
        let id = textarea(&mut doc, "flext");
        let flext = Flext::new(&mut doc, id, &FlextOptions::default(), &mut AncestorLedger::new())
            .unwrap();
        assert!(flext.subscriptions().is_empty());
        assert!(flext.growth().is_none());
        assert_eq!(doc.element(id).unwrap().style("overflow"), None);
    }

    #[test]
    fn ghost_class_without_ghost_text_stays_inactive() {
        let mut doc = Document::new();
        let id = textarea(&mut doc, "flext replaceghosttext");
        let flext = Flext::new(&mut doc, id, &FlextOptions::default(), &mut AncestorLedger::new())
            .unwrap();
        assert!(flext.features().ghost_text);
        assert!(flext.ghost().is_none());
        assert!(flext.subscriptions().is_empty());
    }

    #[test]
    fn unknown_or_non_element_ids_are_usage_errors() {
        let mut doc = Document::new();
        let options = FlextOptions::default();
        let mut ledger = AncestorLedger::new();
        assert_eq!(
            Flext::new(&mut doc, Id(42), &options, &mut ledger).unwrap_err(),
            FlextError::UnknownElement(Id(42))
        );
        assert_eq!(
            Flext::new(&mut doc, Id::DOCUMENT, &options, &mut ledger).unwrap_err(),
            FlextError::NotAnElement(Id::DOCUMENT)
        );
    }

    #[test]
    fn initial_check_grows_prefilled_content() {
        let mut doc = Document::new();
        let id = textarea(&mut doc, "growme");
        {
            let el = doc.element_mut(id).unwrap();
            el.set_style("height", "40px");
            el.scroll_height = 90.0;
        }
        let options = FlextOptions::default().with_ani_time(Duration::ZERO);
        let flext = Flext::new(&mut doc, id, &options, &mut AncestorLedger::new()).unwrap();
        assert_eq!(doc.element(id).unwrap().style("height"), Some("90px"));
        assert_eq!(flext.growth().unwrap().original_height(), 40.0);
    }

    #[test]
    fn enter_only_intercepted_for_enter_key() {
        let mut doc = Document::new();
        let id = textarea(&mut doc, "stopenter");
        let mut ledger = AncestorLedger::new();
        let mut flext = Flext::new(&mut doc, id, &FlextOptions::default(), &mut ledger).unwrap();

        let other = DomEvent::key_down(id, Key::Char('a'));
        let outcome = flext.handle(Handler::InterceptEnter, &mut doc, &other, &mut ledger);
        assert!(!outcome.default_prevented);

        let enter = DomEvent::key_down(id, Key::Enter);
        let outcome = flext.handle(Handler::InterceptEnter, &mut doc, &enter, &mut ledger);
        assert!(outcome.default_prevented);
        assert!(doc.submissions().is_empty());
    }
}
