//! Box heights of text controls and the textarea content measurement that
//! feeds `scroll_height`.

mod metrics;
mod textarea;

pub use metrics::{ScrollHeightModel, content_height, css_height, offset_height, vertical_edges};
pub use textarea::{MonospaceMeasurer, TextMeasurer, reflow_textarea, textarea_content_height};
