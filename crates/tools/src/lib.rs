//! Developer Tooling: read-only inspection of the interaction world.
//!
//! # Invariants
//! - Tools never mutate the world they inspect.

pub mod inspector;

pub use inspector::{EntityInfo, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    concat!("driftwalk-tools v", env!("CARGO_PKG_VERSION"))
}
