use std::path::Path;

use driftwalk_audio::AudioConfig;
use driftwalk_feedback::ProximityConfig;
use driftwalk_input::Keymap;
use driftwalk_kernel::{CHEST_NAME, ScenePreset};
use driftwalk_rig::{LookMode, RigConfig};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Errors from loading or saving an experience configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Frame-loop settings that belong to no single component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Render through the post chain instead of directly.
    pub postprocess: bool,
    /// Upper bound on a single tick's delta, seconds.
    pub max_delta: f32,
    pub look_mode: LookMode,
    /// Entity the proximity loop measures against.
    pub proximity_target: String,
    /// Where the player spawns; also the fixed proximity reference point.
    pub start_point: Vec3,
    /// Frames averaged for the FPS readout.
    pub timer_window: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            postprocess: true,
            max_delta: 0.1,
            look_mode: LookMode::PointerLock,
            proximity_target: CHEST_NAME.to_string(),
            start_point: Vec3::ZERO,
            timer_window: 120,
        }
    }
}

/// Everything tunable about one experience, loaded from YAML.
///
/// Every section is optional; missing sections and fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    pub rig: RigConfig,
    pub proximity: ProximityConfig,
    pub frame: FrameConfig,
    pub audio: AudioConfig,
    pub scene: ScenePreset,
    pub keymap: Keymap,
}

impl ExperienceConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!(path = %path.display(), scene = config.scene.name(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }
}
