pub mod syntax;
pub mod values;
pub mod computed;

// Re-exports so other crates can just use `css::...` nicely.
pub use syntax::{Declaration, parse_declarations};
pub use values::{format_px, parse_leading_px};
pub use computed::VerticalEdges;
