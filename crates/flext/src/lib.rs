//! # flext
//!
//! Behavior controllers for text controls:
//! - auto-growing height up to a max, optionally growing fixed-height ancestors
//! - ghost placeholder text that clears on focus and returns on blur
//! - enter-key interception, optionally submitting the enclosing form
//!
//! Features are switched on per element by class names; see [`ClassNames`].
//! A [`FlextPage`] owns the controllers of one document and routes
//! [`bus::DomEvent`]s to them.

mod controller;
mod enter;
mod error;
mod ghost;
mod grow;
mod options;
mod page;
mod parents;

#[cfg(any(test, feature = "test-harness"))]
pub mod harness;

pub use controller::{Features, Flext, Handler};
pub use error::FlextError;
pub use ghost::{GhostState, GhostText};
pub use grow::{Growth, GrowthState};
pub use options::{ClassNames, FlextOptions};
pub use page::{ControllerId, FlextPage};
pub use parents::AncestorLedger;
