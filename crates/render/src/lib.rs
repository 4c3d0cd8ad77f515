//! Rendering Adapter: renderer-agnostic interface and the post-processing parameter surface.
//!
//! # Invariants
//! - Renderers cannot mutate the world; they only read it.
//! - Post parameters are owned by the frame loop and handed to the renderer by value.
//! - The bloom entry animation always ends exactly on its target values.

mod post;
mod renderer;

pub use post::{BloomEntry, BloomSettings, PostProcessParams};
pub use renderer::{DebugTextRenderer, RenderFrame, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    concat!("driftwalk-render v", env!("CARGO_PKG_VERSION"))
}
