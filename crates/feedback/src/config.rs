use serde::{Deserialize, Serialize};

/// An output driven by the proximity factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    BloomStrength,
    AmbientVolume,
    FilmGrain,
}

impl Channel {
    pub const ALL: [Channel; 3] = [
        Channel::BloomStrength,
        Channel::AmbientVolume,
        Channel::FilmGrain,
    ];
}

/// Value range a channel maps the factor onto. `min` is produced at factor 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelRange {
    pub min: f32,
    pub max: f32,
}

impl ChannelRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map a factor into the range, clamped to the range's own bounds.
    pub fn map(&self, factor: f32) -> f32 {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        (self.min + factor * (self.max - self.min)).clamp(lo, hi)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    /// Steepness of the logarithmic ease.
    pub steepness: f32,
    pub bloom_strength: ChannelRange,
    pub ambient_volume: ChannelRange,
    pub film_grain: ChannelRange,
    /// Channels forced to zero while the inspect overlay is open.
    pub inspect_suppresses: Vec<Channel>,
}

impl ProximityConfig {
    pub fn range(&self, channel: Channel) -> ChannelRange {
        match channel {
            Channel::BloomStrength => self.bloom_strength,
            Channel::AmbientVolume => self.ambient_volume,
            Channel::FilmGrain => self.film_grain,
        }
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            steepness: 20.0,
            bloom_strength: ChannelRange::new(0.0, 1.4),
            ambient_volume: ChannelRange::new(0.035, 0.9),
            film_grain: ChannelRange::new(0.0, 0.1),
            inspect_suppresses: vec![Channel::BloomStrength, Channel::FilmGrain],
        }
    }
}
