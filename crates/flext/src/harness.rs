//! Headless host for driving a [`FlextPage`] the way a browser would:
//! key presses apply their default action unless a listener prevents it,
//! edits reflow the textarea, and time only moves when asked to.

use std::time::Duration;

use bus::{DispatchOutcome, DomEvent, EventKind, Key};
use dom::{Document, Id};
use layout::{MonospaceMeasurer, ScrollHeightModel, css_height, reflow_textarea};

use crate::error::FlextError;
use crate::options::FlextOptions;
use crate::page::{ControllerId, FlextPage};

pub const FRAME: Duration = Duration::from_millis(16);

pub struct PageHarness {
    pub doc: Document,
    pub page: FlextPage,
    measurer: MonospaceMeasurer,
    model: ScrollHeightModel,
    focused: Option<Id>,
}

impl PageHarness {
    pub fn new(options: FlextOptions) -> Self {
        let model = options.scroll_height_model;
        Self {
            doc: Document::new(),
            page: FlextPage::new(options),
            measurer: MonospaceMeasurer::default(),
            model,
            focused: None,
        }
    }

    pub fn with_measurer(mut self, measurer: MonospaceMeasurer) -> Self {
        self.measurer = measurer;
        self
    }

    /// Appends a `<textarea>` with the given classes and inline style.
    pub fn textarea(&mut self, parent: Id, class: &str, style: &str) -> Id {
        let id = self.element(parent, "textarea", style);
        if let Some(el) = self.doc.element_mut(id) {
            el.set_attr("class", class);
        }
        id
    }

    /// Appends an element with an inline style such as `"height: 40px"`.
    pub fn element(&mut self, parent: Id, name: &str, style: &str) -> Id {
        let id = self
            .doc
            .append_element(parent, name)
            .expect("harness parent must exist");
        if let Some(el) = self.doc.element_mut(id) {
            for decl in css::parse_declarations(style) {
                el.set_style(&decl.name, &decl.value);
            }
        }
        id
    }

    pub fn scan(&mut self) -> Result<Vec<ControllerId>, FlextError> {
        let marker = self.page.options().classes.marker_class.clone();
        for el in dom::elements_with_class(&self.doc, "textarea", &marker) {
            self.reflow(el);
        }
        self.page.scan(&mut self.doc)
    }

    pub fn attach(&mut self, el: Id) -> Result<ControllerId, FlextError> {
        self.reflow(el);
        self.page.attach(&mut self.doc, el)
    }

    pub fn dispatch(&mut self, event: DomEvent) -> DispatchOutcome {
        self.page.dispatch(&mut self.doc, &event)
    }

    /// Moves focus to `el`, blurring the previously focused element.
    pub fn focus(&mut self, el: Id) -> DispatchOutcome {
        if let Some(prev) = self.focused.take()
            && prev != el
        {
            self.dispatch(DomEvent::new(prev, EventKind::Blur));
        }
        self.focused = Some(el);
        self.dispatch(DomEvent::new(el, EventKind::Focus))
    }

    pub fn blur(&mut self, el: Id) -> DispatchOutcome {
        if self.focused == Some(el) {
            self.focused = None;
        }
        self.dispatch(DomEvent::new(el, EventKind::Blur))
    }

    pub fn click(&mut self, el: Id) -> DispatchOutcome {
        self.dispatch(DomEvent::new(el, EventKind::Click))
    }

    /// One key press: key-down, the default edit unless prevented, reflow,
    /// key-up. Returns the key-down outcome.
    pub fn press(&mut self, el: Id, key: Key) -> DispatchOutcome {
        let outcome = self.dispatch(DomEvent::key_down(el, key.clone()));
        if !outcome.default_prevented
            && let Some(data) = self.doc.element_mut(el)
        {
            match &key {
                Key::Enter => data.value.push('\n'),
                Key::Char(c) => data.value.push(*c),
                Key::Backspace => {
                    data.value.pop();
                }
                Key::Other(_) => {}
            }
        }
        self.reflow(el);
        self.dispatch(DomEvent::key_up(el, key));
        outcome
    }

    pub fn press_enter(&mut self, el: Id) -> DispatchOutcome {
        self.press(el, Key::Enter)
    }

    /// Types `text` key by key; `\n` is pressed as Enter.
    pub fn type_text(&mut self, el: Id, text: &str) {
        for ch in text.chars() {
            let key = if ch == '\n' { Key::Enter } else { Key::Char(ch) };
            self.press(el, key);
        }
    }

    /// Replaces the value at once, like a paste, and fires `change`.
    pub fn set_value(&mut self, el: Id, value: &str) -> DispatchOutcome {
        if let Some(data) = self.doc.element_mut(el) {
            data.set_value(value);
        }
        self.reflow(el);
        self.dispatch(DomEvent::new(el, EventKind::Change))
    }

    /// Sets the scroll height directly, bypassing text measurement.
    pub fn set_scroll_height(&mut self, el: Id, scroll_height: f32) {
        if let Some(data) = self.doc.element_mut(el) {
            data.scroll_height = scroll_height;
        }
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        self.page.tick(&mut self.doc, dt)
    }

    /// Ticks frame by frame until no animation runs.
    pub fn settle(&mut self) {
        for _ in 0..10_000 {
            if !self.advance(FRAME) {
                return;
            }
        }
    }

    pub fn value(&self, el: Id) -> &str {
        self.doc.element(el).map(|e| e.value.as_str()).unwrap_or("")
    }

    pub fn height(&self, el: Id) -> f32 {
        self.doc.element(el).map(css_height).unwrap_or(0.0)
    }

    pub fn style(&self, el: Id, property: &str) -> Option<&str> {
        self.doc.element(el).and_then(|e| e.style(property))
    }

    pub fn has_class(&self, el: Id, class: &str) -> bool {
        self.doc.element(el).is_some_and(|e| e.has_class(class))
    }

    fn reflow(&mut self, el: Id) {
        reflow_textarea(&mut self.doc, el, &self.measurer, self.model);
    }
}

impl Default for PageHarness {
    fn default() -> Self {
        Self::new(FlextOptions::default())
    }
}
