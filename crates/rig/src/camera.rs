use driftwalk_common::Ray;
use glam::{Mat4, Vec2, Vec3};

use crate::config::RigConfig;

/// Yaw that looks down -Z.
pub const BASE_YAW: f32 = -std::f32::consts::FRAC_PI_2;
pub const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// First-person camera with position, yaw, pitch, and projection parameters.
///
/// `position` is the body; the eye sits `eye_height + bob_offset` above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPersonCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye_height: f32,
    pub bob_offset: f32,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: BASE_YAW,
            pitch: 0.0,
            fov: 50.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 500.0,
            eye_height: 0.0,
            bob_offset: 0.0,
        }
    }
}

impl FirstPersonCamera {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            fov: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            eye_height: config.eye_height,
            ..Self::default()
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * (self.eye_height + self.bob_offset)
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Forward projected on the ground plane; independent of pitch.
    pub fn ground_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Right projected on the ground plane.
    pub fn ground_right(&self) -> Vec3 {
        self.ground_forward().cross(Vec3::Y)
    }

    /// Rotate by angles in radians, clamping pitch short of the poles.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(eye, eye + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray through the screen center.
    pub fn eye_ray(&self) -> Option<Ray> {
        Ray::new(self.eye(), self.forward())
    }

    /// Ray through a point in normalized device coordinates ([-1, 1], y up).
    pub fn cursor_ray(&self, ndc: Vec2) -> Option<Ray> {
        let inv = self.view_projection().inverse();
        let target = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        let eye = self.eye();
        Ray::new(eye, target - eye)
    }
}
