//! Frame Scheduler: the per-frame driver that ties input, movement, interaction,
//! feedback, audio and rendering together.
//!
//! # Invariants
//! - Each tick runs in a fixed order: input, clock, world update, movement,
//!   push-out, bob and footsteps, hover and click, proximity, render.
//! - Nothing moves and nothing is hovered unless the phase is `Running`.
//! - The first click after the world is ready starts the experience exactly once
//!   and is not forwarded to the world.
//! - The frame delta handed to components is clamped to `[0, max_delta]`.
//! - Overlay requests raised by the world take effect at the start of the next tick.

pub mod clock;
pub mod config;
pub mod overlay;
pub mod phase;
pub mod scheduler;

pub use clock::{FrameClock, FrameTimer, MAX_DELTA_CEILING};
pub use config::{ConfigError, ExperienceConfig, FrameConfig};
pub use overlay::OverlayState;
pub use phase::GamePhase;
pub use scheduler::{FrameReport, FrameScheduler};
