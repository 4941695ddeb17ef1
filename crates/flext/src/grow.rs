use std::sync::LazyLock;

use dom::{Document, ElementData, Id};
use fx::Tween;
use layout::{ScrollHeightModel, content_height, css_height, offset_height, vertical_edges};
use regex::Regex;

use crate::options::FlextOptions;
use crate::parents::AncestorLedger;

static MAX_HEIGHT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"maxheight-(\d+)").expect("static regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthState {
    Growing,
    /// Terminal: the element scrolls internally from here on.
    MaxReached,
}

/// Auto-grow state of one element. Heights are content-box px.
#[derive(Debug, Clone)]
pub struct Growth {
    state: GrowthState,
    start_size: f32,
    orig_size: f32,
    max_size: f32,
    vert_padding: f32,
    model: ScrollHeightModel,
    grow_parents: bool,
    parent_depth: usize,
    resizer: Tween,
}

impl Growth {
    /// Reads metrics from the element and hides its overflow.
    pub(crate) fn init(el: &mut ElementData, options: &FlextOptions, grow_parents: bool) -> Self {
        let height = css_height(el);
        let growth = Self {
            state: GrowthState::Growing,
            start_size: height,
            orig_size: height,
            max_size: resolve_max_height(el.class_name(), options),
            vert_padding: vertical_edges(el),
            model: options.scroll_height_model,
            grow_parents,
            parent_depth: options.parent_depth,
            resizer: Tween::new("height", options.ani_time),
        };
        el.set_style("overflow", "hidden");
        growth
    }

    pub fn state(&self) -> GrowthState {
        self.state
    }

    /// Height the element is growing toward (or has grown to).
    pub fn current_height(&self) -> f32 {
        self.start_size
    }

    pub fn original_height(&self) -> f32 {
        self.orig_size
    }

    pub fn max_height(&self) -> f32 {
        self.max_size
    }

    pub fn vertical_padding(&self) -> f32 {
        self.vert_padding
    }

    pub fn is_animating(&self) -> bool {
        self.resizer.is_running()
    }

    /// Grows the element if its content overflows the visible box.
    pub(crate) fn check_size(&mut self, doc: &mut Document, id: Id, ledger: &mut AncestorLedger) {
        let Some(el) = doc.element(id) else {
            return;
        };
        let visible = offset_height(el);
        let content = content_height(el, self.model);

        if content + self.vert_padding > visible {
            self.resize(doc, id, content, ledger);
        }
    }

    fn resize(&mut self, doc: &mut Document, id: Id, content: f32, ledger: &mut AncestorLedger) {
        if self.state == GrowthState::MaxReached {
            return;
        }
        let Some(el) = doc.element_mut(id) else {
            return;
        };
        let from = css_height(el);

        if content + self.vert_padding > self.max_size {
            // An element that started out taller than max keeps its height.
            let new_size = self.max_size.max(self.start_size);
            el.set_style("overflow", "");
            self.resizer.start(doc, id, from, new_size);
            self.state = GrowthState::MaxReached;
            log::debug!(
                target: "flext.grow",
                "element {} reached max height {new_size}",
                id.0
            );
            if self.grow_parents {
                self.grow_ancestors(doc, id, new_size - self.start_size, ledger);
            }
            self.start_size = new_size;
            return;
        }

        let increased = (content - self.start_size).max(0.0);
        self.start_size = self.start_size.max(content);
        log::trace!(
            target: "flext.grow",
            "element {}: content {content}, growing to {}",
            id.0,
            self.start_size
        );
        self.resizer.start(doc, id, from, self.start_size);
        if self.grow_parents {
            self.grow_ancestors(doc, id, increased, ledger);
        }
    }

    fn grow_ancestors(&self, doc: &mut Document, id: Id, delta: f32, ledger: &mut AncestorLedger) {
        ledger.propagate(doc, id, delta, self.vert_padding, self.parent_depth);
    }

    /// Advances the height animation. Returns whether it is still running.
    pub(crate) fn tick(&mut self, doc: &mut Document, id: Id, dt: std::time::Duration) -> bool {
        self.resizer.tick(doc, id, dt)
    }
}

/// Explicit option, else a `maxheight-<n>` token anywhere in the class
/// attribute, else the default.
fn resolve_max_height(class_name: &str, options: &FlextOptions) -> f32 {
    if options.max_height > 0.0 {
        return options.max_height;
    }
    MAX_HEIGHT_CLASS
        .captures(class_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(options.default_max_height)
}
