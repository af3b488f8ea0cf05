//! Banner view
//!
//! The banner is a render target with no timing logic of its own. The
//! presenter samples its animations each tick and writes the results
//! (visibility, layout width, spinner frame) into the view, which the
//! widget implementation then draws over the top rows of the frame.

mod banner_render;
mod banner_state;

pub use banner_render::truncate_to_width;
pub use banner_state::{SPINNER_FRAMES, StatusBarView};


#[cfg(test)]
#[path = "banner/banner_render_tests.rs"]
mod banner_render_tests;
