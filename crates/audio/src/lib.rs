//! Audio Adapter: the sound collaborator seen from the frame loop.
//!
//! # Invariants
//! - Calls on sounds that have not finished loading are skipped, never errors.
//! - Positional parameters are configured once; the core never attenuates per frame.

pub mod config;
pub mod cue;
pub mod output;

pub use config::AudioConfig;
pub use cue::LoopCue;
pub use output::{
    AudioCommand, AudioOutput, COMMAND_LOG_LIMIT, PositionalConfig, RecordingAudio, SoundId,
};
