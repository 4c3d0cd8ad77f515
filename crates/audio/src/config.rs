use serde::{Deserialize, Serialize};

use crate::output::{PositionalConfig, SoundId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Looping positional hum whose volume follows proximity.
    pub ambient: SoundId,
    /// Looping footstep track, audible only while walking.
    pub footsteps: SoundId,
    pub footstep_volume: f32,
    /// Distance model for the ambient source. Its position is replaced by the
    /// proximity target's once the world is ready.
    pub ambient_positional: PositionalConfig,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            ambient: SoundId::new("ambientHum"),
            footsteps: SoundId::new("footsteps"),
            footstep_volume: 0.4,
            ambient_positional: PositionalConfig {
                ref_distance: 2.0,
                rolloff_factor: 1.0,
                ..Default::default()
            },
        }
    }
}
