//! Input: raw key/pointer events folded into logical actions and per-tick intent snapshots.
//!
//! # Invariants
//! - Held movement flags are set and cleared by input only, never by the tick.
//! - The tick consumes exactly one `IntentSnapshot`; nothing mutates intent mid-tick.

pub mod action;
pub mod intent;
pub mod keymap;

pub use action::{Action, Motion};
pub use intent::{InputState, IntentFlags, IntentSnapshot};
pub use keymap::Keymap;
