use std::collections::BTreeSet;

use driftwalk_common::{EPSILON, log_ease};
use glam::Vec3;

use crate::config::{Channel, ProximityConfig};

/// Channel outputs for one frame. Recomputed every tick, never integrated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelValues {
    pub factor: f32,
    pub bloom_strength: f32,
    pub ambient_volume: f32,
    pub film_grain: f32,
}

impl ChannelValues {
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::BloomStrength => self.bloom_strength,
            Channel::AmbientVolume => self.ambient_volume,
            Channel::FilmGrain => self.film_grain,
        }
    }

    fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::BloomStrength => self.bloom_strength = value,
            Channel::AmbientVolume => self.ambient_volume = value,
            Channel::FilmGrain => self.film_grain = value,
        }
    }
}

/// Maps player-to-target distance into eased channel values.
///
/// The reference distance is captured once, when the target enters the
/// world, from a fixed start point. It is never recomputed from the moving
/// player.
#[derive(Debug, Clone)]
pub struct ProximityFeedback {
    config: ProximityConfig,
    max_distance: Option<f32>,
    suppressed: BTreeSet<Channel>,
}

impl ProximityFeedback {
    pub fn new(config: ProximityConfig) -> Self {
        Self {
            config,
            max_distance: None,
            suppressed: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    pub fn max_distance(&self) -> Option<f32> {
        self.max_distance
    }

    pub fn has_reference(&self) -> bool {
        self.max_distance.is_some()
    }

    /// Record the reference distance. Later calls keep the first value.
    pub fn capture_reference(&mut self, start: Vec3, target: Vec3) -> f32 {
        if let Some(max) = self.max_distance {
            tracing::debug!(max, "proximity reference already captured");
            return max;
        }
        let max = start.distance(target);
        self.max_distance = Some(max);
        tracing::info!(max, "proximity reference captured");
        max
    }

    /// Forget the reference, e.g. when the target leaves the world.
    pub fn clear_reference(&mut self) {
        self.max_distance = None;
    }

    /// `1 - d / max` clamped to [0, 1]. A degenerate reference counts as on target.
    pub fn raw_factor(&self, distance: f32) -> Option<f32> {
        let max = self.max_distance?;
        if max <= EPSILON {
            return Some(1.0);
        }
        Some((1.0 - distance / max).clamp(0.0, 1.0))
    }

    /// Eased factor in [0, 1].
    pub fn factor(&self, distance: f32) -> Option<f32> {
        self.raw_factor(distance)
            .map(|raw| log_ease(raw, self.config.steepness))
    }

    pub fn suppress(&mut self, channel: Channel) {
        self.suppressed.insert(channel);
    }

    pub fn release(&mut self, channel: Channel) {
        self.suppressed.remove(&channel);
    }

    pub fn is_suppressed(&self, channel: Channel) -> bool {
        self.suppressed.contains(&channel)
    }

    /// Apply or lift the configured inspect-overlay suppression set.
    pub fn set_inspect_open(&mut self, open: bool) {
        for &channel in &self.config.inspect_suppresses {
            if open {
                self.suppressed.insert(channel);
            } else {
                self.suppressed.remove(&channel);
            }
        }
    }

    /// Values for a distance, or `None` before a reference is captured.
    ///
    /// Suppression is applied after mapping and overrides it.
    pub fn evaluate(&self, distance: f32) -> Option<ChannelValues> {
        let factor = self.factor(distance)?;
        let mut values = ChannelValues {
            factor,
            ..Default::default()
        };
        for channel in Channel::ALL {
            values.set(channel, self.config.range(channel).map(factor));
        }
        for &channel in &self.suppressed {
            values.set(channel, 0.0);
        }
        Some(values)
    }

    pub fn evaluate_at(&self, player: Vec3, target: Vec3) -> Option<ChannelValues> {
        self.evaluate(player.distance(target))
    }
}
