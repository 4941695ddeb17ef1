use css::{VerticalEdges, parse_leading_px};
use dom::ElementData;
use serde::Deserialize;

/// Whether an engine reports `scroll_height` with the vertical padding folded
/// in. Engines disagree, so this is configured rather than guessed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollHeightModel {
    #[default]
    IncludesPadding,
    ContentOnly,
}

/// Padding plus border, top and bottom, from the inline style.
pub fn vertical_edges(el: &ElementData) -> f32 {
    VerticalEdges::from_declarations(&el.style).total()
}

/// Content-box height: the inline `height` if it is a px value, else the
/// height layout assigned.
pub fn css_height(el: &ElementData) -> f32 {
    el.style("height")
        .and_then(parse_leading_px)
        .unwrap_or(el.layout_height)
}

/// Visible border-box height.
pub fn offset_height(el: &ElementData) -> f32 {
    css_height(el) + vertical_edges(el)
}

/// Height of the text content alone, with padding removed from the reported
/// scroll height when the engine includes it.
pub fn content_height(el: &ElementData, model: ScrollHeightModel) -> f32 {
    match model {
        ScrollHeightModel::IncludesPadding => {
            let padding = VerticalEdges::from_declarations(&el.style).padding();
            (el.scroll_height - padding).max(0.0)
        }
        ScrollHeightModel::ContentOnly => el.scroll_height,
    }
}
