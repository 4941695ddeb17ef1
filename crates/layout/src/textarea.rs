use css::{VerticalEdges, parse_leading_px};
use dom::{Document, Id};

use crate::metrics::{ScrollHeightModel, css_height};

/// Text measurement used while laying out textarea values.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> f32;
    fn line_height(&self) -> f32;
}

/// Fixed advance per character; enough for tests and headless hosts.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Height of a pre-wrapped textarea value laid out in `available_width`.
///
/// Hard breaks (`\n`, `\r\n`, `\r`) always start a new line, spaces are
/// preserved, and words wider than the line are broken per character.
/// An empty value still occupies one line.
pub fn textarea_content_height(
    measurer: &dyn TextMeasurer,
    value: &str,
    available_width: f32,
) -> f32 {
    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    let lines: usize = normalized
        .split('\n')
        .map(|line| wrapped_line_count(measurer, line, available_width))
        .sum();
    lines.max(1) as f32 * measurer.line_height()
}

fn wrapped_line_count(measurer: &dyn TextMeasurer, line: &str, available_width: f32) -> usize {
    if !available_width.is_finite() || available_width <= 0.0 {
        return 1;
    }

    let mut count = 1;
    let mut used = 0.0;
    for word in line.split_inclusive(' ') {
        let w = measurer.measure(word);
        if used + w <= available_width {
            used += w;
            continue;
        }
        // Trailing spaces hang past the edge instead of wrapping.
        let trimmed = measurer.measure(word.trim_end_matches(' '));
        if used + trimmed <= available_width {
            used += w;
            continue;
        }
        if used > 0.0 {
            count += 1;
            used = 0.0;
        }
        if w <= available_width {
            used = w;
            continue;
        }
        for ch in word.chars() {
            let mut buf = [0u8; 4];
            let cw = measurer.measure(ch.encode_utf8(&mut buf));
            if used + cw > available_width && used > 0.0 {
                count += 1;
                used = 0.0;
            }
            used += cw;
        }
    }
    count
}

/// Recomputes `scroll_height` of a textarea from its value, the way a
/// browser would report it after an edit. Scroll height never drops below
/// the visible content box.
pub fn reflow_textarea(
    doc: &mut Document,
    id: Id,
    measurer: &dyn TextMeasurer,
    model: ScrollHeightModel,
) -> Option<f32> {
    let el = doc.element_mut(id)?;
    let width = el
        .style("width")
        .and_then(parse_leading_px)
        .unwrap_or(f32::INFINITY);
    let content = textarea_content_height(measurer, &el.value, width).max(css_height(el));
    let scroll = match model {
        ScrollHeightModel::IncludesPadding => {
            content + VerticalEdges::from_declarations(&el.style).padding()
        }
        ScrollHeightModel::ContentOnly => content,
    };
    el.scroll_height = scroll;
    Some(scroll)
}
