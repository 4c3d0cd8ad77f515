use driftwalk_common::{exp_lerp_factor, lerp};
use serde::{Deserialize, Serialize};

/// The three bloom knobs the post chain exposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloomSettings {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl BloomSettings {
    /// Resting bloom.
    pub const TARGET: Self = Self {
        strength: 0.2,
        radius: 0.49,
        threshold: 0.005,
    };

    /// Overexposed flash shown the moment the player enters.
    pub const ENTRY: Self = Self {
        strength: 1.5,
        radius: 1.2,
        threshold: 0.0,
    };
}

/// Numeric surface of the post-processing chain, written each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostProcessParams {
    /// Composite through the post chain; when false the scene renders directly.
    pub enabled: bool,
    pub bloom: BloomSettings,
    pub film_grain: f32,
}

impl Default for PostProcessParams {
    fn default() -> Self {
        Self {
            enabled: true,
            bloom: BloomSettings::TARGET,
            film_grain: 0.1,
        }
    }
}

/// Entry flash: bloom jumps to `entry` and eases back to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomEntry {
    pub entry: BloomSettings,
    pub target: BloomSettings,
    /// Exponential approach rate per second.
    pub speed: f32,
    active: bool,
}

impl Default for BloomEntry {
    fn default() -> Self {
        Self {
            entry: BloomSettings::ENTRY,
            target: BloomSettings::TARGET,
            speed: 6.0,
            active: false,
        }
    }
}

impl BloomEntry {
    pub fn is_animating(&self) -> bool {
        self.active
    }

    /// Jump to the entry values and begin easing.
    pub fn start(&mut self, params: &mut PostProcessParams) {
        params.bloom = self.entry;
        self.active = true;
        tracing::debug!("bloom entry started");
    }

    /// Move the strength the flash settles on, e.g. to whatever another
    /// driver will write once the flash is over.
    pub fn retarget_strength(&mut self, strength: f32) {
        self.target.strength = strength;
    }

    /// One easing step. Returns true on the tick the animation completes.
    pub fn update(&mut self, params: &mut PostProcessParams, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        let t = exp_lerp_factor(self.speed, dt);
        let b = &mut params.bloom;
        b.strength = lerp(b.strength, self.target.strength, t);
        b.radius = lerp(b.radius, self.target.radius, t);
        b.threshold = lerp(b.threshold, self.target.threshold, t);

        let done = (b.strength - self.target.strength).abs() < 0.001
            && (b.radius - self.target.radius).abs() < 0.001
            && (b.threshold - self.target.threshold).abs() < 0.0001;
        if done {
            *b = self.target;
            self.active = false;
            tracing::debug!("bloom entry finished");
        }
        done
    }
}
