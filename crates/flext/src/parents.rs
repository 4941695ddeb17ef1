use std::collections::HashSet;

use css::{format_px, parse_leading_px};
use dom::{Ancestors, Document, Id};

/// Remembers which ancestors have already been grown.
///
/// The first time an ancestor is grown it also receives the child's vertical
/// padding, since its fixed height was sized for the child's content box.
/// Later growths add only the delta. One ledger is shared by every
/// controller of a page, so two growing children of the same box still
/// correct for padding once.
#[derive(Debug, Default)]
pub struct AncestorLedger {
    adjusted: HashSet<Id>,
}

impl AncestorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_adjusted(&self, id: Id) -> bool {
        self.adjusted.contains(&id)
    }

    /// Grows every ancestor of `child` within `depth` levels that has an
    /// explicit inline height by `delta`. Ancestors without one are skipped
    /// and the walk continues above them. Returns the ancestors touched.
    pub fn propagate(
        &mut self,
        doc: &mut Document,
        child: Id,
        delta: f32,
        vert_padding: f32,
        depth: usize,
    ) -> Vec<Id> {
        let chain: Vec<Id> = Ancestors::new(doc, child).take(depth).collect();
        let mut touched = Vec::new();

        for ancestor in chain {
            let Some(el) = doc.element_mut(ancestor) else {
                continue;
            };
            let Some(raw) = el.style("height").filter(|h| !h.trim().is_empty()) else {
                continue;
            };
            let Some(height) = parse_leading_px(raw) else {
                log::debug!(
                    target: "flext.parents",
                    "ancestor {} has non-px height {raw:?}, leaving it alone",
                    ancestor.0
                );
                continue;
            };

            let first_time = self.adjusted.insert(ancestor);
            let new_height = if first_time {
                height + delta + vert_padding
            } else {
                height + delta
            };
            el.set_style("height", &format_px(new_height));
            log::trace!(
                target: "flext.parents",
                "ancestor {}: {height} -> {new_height}",
                ancestor.0
            );
            touched.push(ancestor);
        }

        touched
    }
}
