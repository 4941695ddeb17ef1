use dom::ElementData;

use crate::options::ClassNames;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhostState {
    /// The value is the placeholder.
    Ghosted,
    /// The value is user content (or empty while focused).
    Real,
}

/// Placeholder emulation: the ghost text is a real value that is cleared on
/// focus and put back on blur when the field is left empty.
#[derive(Debug, Clone)]
pub struct GhostText {
    text: String,
    class: Option<String>,
    state: GhostState,
}

impl GhostText {
    /// Reads the ghost text and class attributes. Returns `None` when there
    /// is no (non-empty) ghost text, which leaves the feature off.
    pub(crate) fn from_element(el: &mut ElementData, names: &ClassNames) -> Option<Self> {
        let text = el
            .attr(&names.ghost_text_attr)
            .filter(|t| !t.is_empty())?
            .to_string();
        let class = el
            .attr(&names.ghost_class_attr)
            .filter(|c| !c.trim().is_empty())
            .map(|c| c.trim().to_string());

        let mut ghost = Self {
            text,
            class,
            state: GhostState::Ghosted,
        };
        if el.value != ghost.text {
            ghost.state = GhostState::Real;
            if let Some(class) = &ghost.class {
                el.remove_class(class);
            }
        }
        Some(ghost)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn state(&self) -> GhostState {
        self.state
    }

    pub(crate) fn focus(&mut self, el: &mut ElementData) {
        if el.value != self.text {
            return;
        }
        el.set_value("");
        if let Some(class) = &self.class {
            el.remove_class(class);
        }
        self.state = GhostState::Real;
        log::trace!(target: "flext.ghost", "cleared ghost text on focus");
    }

    pub(crate) fn blur(&mut self, el: &mut ElementData) {
        if !el.value.is_empty() {
            return;
        }
        el.set_value(&self.text);
        if let Some(class) = &self.class {
            el.add_class(class);
        }
        self.state = GhostState::Ghosted;
        log::trace!(target: "flext.ghost", "restored ghost text on blur");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: &str) -> ElementData {
        let mut el = ElementData::new("textarea");
        el.set_attr("class", "flext replaceghosttext ghost-text");
        el.set_attr("ghosttext", "enter something here");
        el.set_attr("ghostclass", "ghost-text");
        el.set_value(value);
        el
    }

    #[test]
    fn starts_ghosted_when_value_matches() {
        let mut el = field("enter something here");
        let ghost = GhostText::from_element(&mut el, &ClassNames::default()).unwrap();
        assert_eq!(ghost.state(), GhostState::Ghosted);
        assert!(el.has_class("ghost-text"));
    }

    #[test]
    fn real_content_strips_class_at_start() {
        let mut el = field("my draft");
        let ghost = GhostText::from_element(&mut el, &ClassNames::default()).unwrap();
        assert_eq!(ghost.state(), GhostState::Real);
        assert!(!el.has_class("ghost-text"));
        assert_eq!(el.value, "my draft");
    }

    #[test]
    fn missing_ghost_text_disables_feature() {
        let mut el = ElementData::new("textarea");
        el.set_attr("ghostclass", "ghost-text");
        assert!(GhostText::from_element(&mut el, &ClassNames::default()).is_none());
        el.set_attr("ghosttext", "");
        assert!(GhostText::from_element(&mut el, &ClassNames::default()).is_none());
    }

    #[test]
    fn focus_and_blur_round_trip() {
        let mut el = field("enter something here");
        let mut ghost = GhostText::from_element(&mut el, &ClassNames::default()).unwrap();

        ghost.focus(&mut el);
        assert_eq!(el.value, "");
        assert!(!el.has_class("ghost-text"));

        ghost.blur(&mut el);
        assert_eq!(el.value, "enter something here");
        assert!(el.has_class("ghost-text"));
        assert_eq!(ghost.state(), GhostState::Ghosted);
    }

    #[test]
    fn typed_value_survives_blur() {
        let mut el = field("enter something here");
        let mut ghost = GhostText::from_element(&mut el, &ClassNames::default()).unwrap();

        ghost.focus(&mut el);
        el.set_value("hello");
        ghost.blur(&mut el);
        assert_eq!(el.value, "hello");
        assert!(!el.has_class("ghost-text"));
        assert_eq!(ghost.state(), GhostState::Real);
    }

    #[test]
    fn works_without_ghost_class() {
        let mut el = ElementData::new("textarea");
        el.set_attr("ghosttext", "type here");
        el.set_value("type here");
        let mut ghost = GhostText::from_element(&mut el, &ClassNames::default()).unwrap();
        assert_eq!(ghost.class(), None);
        ghost.focus(&mut el);
        assert_eq!(el.value, "");
        ghost.blur(&mut el);
        assert_eq!(el.value, "type here");
    }
}
