//! Interactive block-selection overlay.
//!
//! The overlay is modeled as a plain state machine: a host view feeds it
//! pointer events in screen coordinates and pulls a [`RenderPlan`] back
//! whenever it needs to redraw. No drawing or event plumbing lives here.

mod state;
mod surface;

pub use state::SelectionState;
pub use surface::{BlockOutline, RenderPlan, SelectionSurface, TapHit};
