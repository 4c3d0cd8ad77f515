//! Resource loading lifecycle: declared sources, progress, and the one-shot ready signal.
//!
//! Decoding lives in the host's loader. This crate only tracks which declared
//! sources have finished and what they produced; the core never drives loading.
//!
//! # Invariants
//! - `ResourceEvent::Ready` is emitted exactly once, after every declared source finished.
//! - A failed source is logged and counted as finished (degraded, never fatal).

pub mod manifest;
pub mod tracker;

pub use manifest::{Source, SourceKind, SourceManifest};
pub use tracker::{
    AnimationClip, LoadedItem, Progress, ResourceCatalog, ResourceEvent, ResourceTracker,
};

/// Errors from manifest and tracker operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate source name: {0}")]
    DuplicateSource(String),
    #[error("source not declared in manifest: {0}")]
    UnknownSource(String),
    #[error("source already finished: {0}")]
    AlreadyFinished(String),
}
