//! Time-based style tweens.
//!
//! A [`Tween`] interpolates one px-valued style property of one element.
//! Hosts advance tweens with [`Tween::tick`]; there is no timer of its own.

mod easing;
mod tween;

pub use easing::{EasingFn, ease_in_out, linear, sine_in_out};
pub use tween::Tween;
