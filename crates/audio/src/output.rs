use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Name of a loaded sound, as declared in the source manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundId(pub String);

impl SoundId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SoundId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Distance model for a positional sound. Applied once; the backend handles attenuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionalConfig {
    pub position: Vec3,
    pub ref_distance: f32,
    pub rolloff_factor: f32,
}

impl Default for PositionalConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            ref_distance: 1.0,
            rolloff_factor: 1.0,
        }
    }
}

/// Audio collaborator. Calls on sounds that are not loaded must be harmless.
pub trait AudioOutput {
    fn is_loaded(&self, sound: &SoundId) -> bool;
    fn is_playing(&self, sound: &SoundId) -> bool;
    fn play(&mut self, sound: &SoundId);
    fn stop(&mut self, sound: &SoundId);
    fn set_volume(&mut self, sound: &SoundId, volume: f32);
    fn configure_positional(&mut self, sound: &SoundId, config: PositionalConfig);
}

/// A call made against [`RecordingAudio`].
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Play(SoundId),
    Stop(SoundId),
    SetVolume(SoundId, f32),
    ConfigurePositional(SoundId, PositionalConfig),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Voice {
    playing: bool,
    volume: f32,
    positional: Option<PositionalConfig>,
}

/// Most commands [`RecordingAudio`] keeps; older ones are dropped in bulk.
pub const COMMAND_LOG_LIMIT: usize = 1024;

/// Headless backend that tracks voice state and logs every call that
/// changes it.
///
/// Calls on unloaded sounds are dropped with a trace line and not recorded.
/// Volume writes that leave the volume unchanged are not recorded either.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    loaded: BTreeSet<SoundId>,
    voices: BTreeMap<SoundId, Voice>,
    log: Vec<AudioCommand>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a sound as decoded and ready.
    pub fn load(&mut self, sound: impl Into<SoundId>) {
        let sound = sound.into();
        self.voices.entry(sound.clone()).or_insert(Voice {
            volume: 1.0,
            ..Default::default()
        });
        self.loaded.insert(sound);
    }

    pub fn volume(&self, sound: &SoundId) -> Option<f32> {
        self.voices.get(sound).map(|v| v.volume)
    }

    pub fn positional(&self, sound: &SoundId) -> Option<PositionalConfig> {
        self.voices.get(sound).and_then(|v| v.positional)
    }

    pub fn commands(&self) -> &[AudioCommand] {
        &self.log
    }

    pub fn drain_commands(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.log)
    }

    fn record(&mut self, command: AudioCommand) {
        if self.log.len() >= COMMAND_LOG_LIMIT {
            self.log.drain(..COMMAND_LOG_LIMIT / 2);
        }
        self.log.push(command);
    }

    fn voice_mut(&mut self, sound: &SoundId) -> Option<&mut Voice> {
        if !self.loaded.contains(sound) {
            tracing::trace!(%sound, "sound not loaded, call skipped");
            return None;
        }
        self.voices.get_mut(sound)
    }
}

impl AudioOutput for RecordingAudio {
    fn is_loaded(&self, sound: &SoundId) -> bool {
        self.loaded.contains(sound)
    }

    fn is_playing(&self, sound: &SoundId) -> bool {
        self.voices.get(sound).is_some_and(|v| v.playing)
    }

    fn play(&mut self, sound: &SoundId) {
        if let Some(voice) = self.voice_mut(sound) {
            voice.playing = true;
            self.record(AudioCommand::Play(sound.clone()));
        }
    }

    fn stop(&mut self, sound: &SoundId) {
        if let Some(voice) = self.voice_mut(sound) {
            voice.playing = false;
            self.record(AudioCommand::Stop(sound.clone()));
        }
    }

    fn set_volume(&mut self, sound: &SoundId, volume: f32) {
        if let Some(voice) = self.voice_mut(sound) {
            if voice.volume == volume {
                return;
            }
            voice.volume = volume;
            self.record(AudioCommand::SetVolume(sound.clone(), volume));
        }
    }

    fn configure_positional(&mut self, sound: &SoundId, config: PositionalConfig) {
        if let Some(voice) = self.voice_mut(sound) {
            voice.positional = Some(config);
            self.record(AudioCommand::ConfigurePositional(sound.clone(), config));
        }
    }
}
