use std::f32::consts::PI;

use driftwalk_common::smooth_toward;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::{BASE_YAW, FirstPersonCamera};

/// Radians per pixel of locked-pointer motion before `pointer_speed`.
pub const POINTER_RADIANS_PER_PIXEL: f32 = 0.002;

/// How view direction is driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookMode {
    /// Relative mouse motion while the pointer is locked.
    #[default]
    PointerLock,
    /// Absolute cursor position, damped toward a bounded view cone.
    Cursor,
}

/// Turn the camera by raw pointer motion in pixels.
pub fn pointer_look(camera: &mut FirstPersonCamera, delta: Vec2, pointer_speed: f32) {
    let k = POINTER_RADIANS_PER_PIXEL * pointer_speed;
    camera.rotate(delta.x * k, -delta.y * k);
}

/// Cursor-driven look: the view eases toward an angle proportional to the
/// cursor's offset from the screen center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorLook {
    pub sensitivity: f32,
    pub damping: f32,
    /// Turn to the right of the base heading, radians.
    turn: f32,
    tilt: f32,
}

impl CursorLook {
    pub fn new(sensitivity: f32, damping: f32) -> Self {
        Self {
            sensitivity,
            damping,
            turn: 0.0,
            tilt: 0.0,
        }
    }

    /// Target `(turn, tilt)` for a cursor in [-0.5, 0.5] with y down.
    pub fn target(&self, cursor: Vec2) -> (f32, f32) {
        (
            cursor.x * self.sensitivity * PI,
            -cursor.y * self.sensitivity * PI,
        )
    }

    /// One damping step, written through to the camera.
    pub fn update(&mut self, camera: &mut FirstPersonCamera, cursor: Vec2) {
        let (turn, tilt) = self.target(cursor);
        self.turn = smooth_toward(self.turn, turn, self.damping);
        self.tilt = smooth_toward(self.tilt, tilt, self.damping);
        camera.yaw = BASE_YAW + self.turn;
        camera.pitch = self.tilt;
    }
}
