//! Proximity Feedback: distance to a target, eased and fanned out into output channels.
//!
//! # Invariants
//! - Factors are clamped to [0, 1] before any channel sees them.
//! - Each channel maps and clamps against its own range only.
//! - Suppression is applied last and always wins.
//! - The reference distance is captured once and never tracks the player.

pub mod config;
pub mod proximity;

pub use config::{Channel, ChannelRange, ProximityConfig};
pub use proximity::{ChannelValues, ProximityFeedback};
