use serde::{Deserialize, Serialize};

/// Tunables for movement, collision, bob and look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Units per second at full walking velocity.
    pub movement_speed: f32,
    /// Replaces `movement_speed` while sprint is held.
    pub sprint_speed: f32,
    /// Velocity time constant in seconds.
    pub velocity_decay: f32,
    pub player_radius: f32,
    pub eye_height: f32,
    pub bob_amplitude: f32,
    /// Radians of bob cycle per unit of phase.
    pub bob_frequency: f32,
    /// Offset below which a stopped bob snaps back to rest.
    pub bob_settle_threshold: f32,
    /// Pointer-lock look multiplier on top of 0.002 rad per pixel.
    pub pointer_speed: f32,
    pub cursor_sensitivity: f32,
    pub cursor_damping: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            movement_speed: 15.0,
            sprint_speed: 25.0,
            velocity_decay: 0.1,
            player_radius: 0.5,
            eye_height: 0.0,
            bob_amplitude: 0.05,
            bob_frequency: 10.0,
            bob_settle_threshold: 0.001,
            pointer_speed: 0.8,
            cursor_sensitivity: 0.4,
            cursor_damping: 0.05,
            fov_degrees: 50.0,
            near: 0.1,
            far: 500.0,
        }
    }
}
