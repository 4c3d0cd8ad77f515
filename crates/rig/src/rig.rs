use driftwalk_common::{EPSILON, Ray};
use driftwalk_input::IntentFlags;
use glam::{Vec2, Vec3};

use crate::camera::FirstPersonCamera;
use crate::config::RigConfig;
use crate::look::{CursorLook, pointer_look};
use crate::motion::{HeadBob, SprintTimer};
use crate::obstacles::{Obstacles, PointObstacle, push_out};

/// Horizontal movement axis relative to the current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAxis {
    Strafe,
    Forward,
}

/// Which axes of a displacement were committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub strafe: bool,
    pub forward: bool,
}

impl MoveOutcome {
    pub fn committed(&self) -> bool {
        self.strafe || self.forward
    }
}

/// First-person body: owns the camera, velocity and secondary motion.
///
/// Movement is resolved per axis: each axis casts its own ray from the
/// current position, so sliding along a wall works but a diagonal step into
/// a corner can clip its edge.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: RigConfig,
    camera: FirstPersonCamera,
    velocity: Vec3,
    bob: HeadBob,
    sprint: SprintTimer,
    cursor_look: CursorLook,
}

impl CameraRig {
    pub fn new(config: RigConfig) -> Self {
        Self {
            camera: FirstPersonCamera::from_config(&config),
            velocity: Vec3::ZERO,
            bob: HeadBob::new(
                config.bob_amplitude,
                config.bob_frequency,
                config.bob_settle_threshold,
            ),
            sprint: SprintTimer::default(),
            cursor_look: CursorLook::new(config.cursor_sensitivity, config.cursor_damping),
            config,
        }
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FirstPersonCamera {
        &mut self.camera
    }

    pub fn position(&self) -> Vec3 {
        self.camera.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.camera.position = position;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn sprint_elapsed(&self) -> f32 {
        self.sprint.elapsed()
    }

    fn speed(&self, flags: &IntentFlags) -> f32 {
        if flags.sprint {
            self.config.sprint_speed
        } else {
            self.config.movement_speed
        }
    }

    /// Fold held controls into velocity and return this tick's `(strafe, forward)` displacement.
    pub fn apply_intent(&mut self, flags: &IntentFlags, dt: f32) -> Vec2 {
        let decay = if self.config.velocity_decay > EPSILON {
            (dt / self.config.velocity_decay).min(1.0)
        } else {
            1.0
        };
        self.velocity.x -= self.velocity.x * decay;
        self.velocity.z -= self.velocity.z * decay;

        let direction = flags.direction();
        if flags.forward || flags.backward {
            self.velocity.z -= direction.y * dt;
        }
        if flags.left || flags.right {
            self.velocity.x -= direction.x * dt;
        }

        let speed = self.speed(flags);
        Vec2::new(
            -self.velocity.x * dt * speed,
            -self.velocity.z * dt * speed,
        )
    }

    /// Commit a displacement axis by axis, strafe first.
    pub fn try_move<O: Obstacles + ?Sized>(&mut self, displacement: Vec2, obstacles: &O) -> MoveOutcome {
        MoveOutcome {
            strafe: self.try_move_axis(MoveAxis::Strafe, displacement.x, obstacles),
            forward: self.try_move_axis(MoveAxis::Forward, displacement.y, obstacles),
        }
    }

    /// Move along one axis unless an obstacle is closer than the player radius in that direction.
    pub fn try_move_axis<O: Obstacles + ?Sized>(
        &mut self,
        axis: MoveAxis,
        amount: f32,
        obstacles: &O,
    ) -> bool {
        if amount == 0.0 {
            return false;
        }
        let basis = match axis {
            MoveAxis::Strafe => self.camera.ground_right(),
            MoveAxis::Forward => self.camera.ground_forward(),
        };
        let Some(ray) = Ray::new(self.camera.position, basis * amount.signum()) else {
            return false;
        };
        if let Some(hit) = obstacles.raycast(&ray) {
            if hit < self.config.player_radius {
                tracing::trace!(?axis, hit, "movement blocked");
                return false;
            }
        }
        self.camera.position += basis * amount;
        true
    }

    /// Resolve overlap with point obstacles after movement.
    pub fn push_out(&mut self, points: &[PointObstacle]) -> bool {
        push_out(&mut self.camera.position, points)
    }

    /// Head bob and sprint timer. Returns true on the tick sprint starts.
    pub fn update_motion(&mut self, flags: &IntentFlags, dt: f32) -> bool {
        let started = self.sprint.update(flags.sprint, dt);
        let rate = if self.config.movement_speed > EPSILON {
            self.speed(flags) / self.config.movement_speed
        } else {
            1.0
        };
        self.bob.update(dt, flags.is_moving(), rate);
        self.camera.bob_offset = self.bob.offset();
        started
    }

    /// Pointer-lock look by raw pixel motion.
    pub fn look(&mut self, delta: Vec2) {
        if delta != Vec2::ZERO {
            pointer_look(&mut self.camera, delta, self.config.pointer_speed);
        }
    }

    /// Cursor-mode look for a cursor in [-0.5, 0.5].
    pub fn cursor_look(&mut self, cursor: Vec2) {
        self.cursor_look.update(&mut self.camera, cursor);
    }

    /// Hover ray: screen center when locked, the cursor otherwise.
    pub fn hover_ray(&self, cursor: Option<Vec2>) -> Option<Ray> {
        match cursor {
            // cursor y grows downward; NDC y grows upward
            Some(c) => self.camera.cursor_ray(Vec2::new(c.x * 2.0, -c.y * 2.0)),
            None => self.camera.eye_ray(),
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(RigConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftwalk_common::{Aabb, ObstacleSet};

    fn forward_flags() -> IntentFlags {
        IntentFlags {
            forward: true,
            ..Default::default()
        }
    }

    fn wall_ahead(distance: f32) -> ObstacleSet {
        // Face of the box sits `distance` in front of the origin along -Z.
        ObstacleSet::new(vec![Aabb::new(
            Vec3::new(-5.0, -1.0, -distance - 1.0),
            Vec3::new(5.0, 1.0, -distance),
        )])
    }

    #[test]
    fn forward_intent_moves_forward() {
        let mut rig = CameraRig::default();
        let d = rig.apply_intent(&forward_flags(), 0.016);
        assert!(d.y > 0.0);
        assert_eq!(d.x, 0.0);
        let out = rig.try_move(d, &());
        assert!(out.forward && !out.strafe);
        assert!(rig.position().z < 0.0);
    }

    #[test]
    fn opposing_keys_do_not_move() {
        let mut rig = CameraRig::default();
        let flags = IntentFlags {
            forward: true,
            backward: true,
            ..Default::default()
        };
        let d = rig.apply_intent(&flags, 0.016);
        assert_eq!(d, Vec2::ZERO);
        assert!(!rig.try_move(d, &()).committed());
    }

    #[test]
    fn diagonal_is_normalized() {
        let mut rig = CameraRig::default();
        let flags = IntentFlags {
            forward: true,
            right: true,
            ..Default::default()
        };
        let d = rig.apply_intent(&flags, 0.016);
        assert!((d.x - d.y).abs() < 1e-7);
        let mut straight = CameraRig::default();
        let s = straight.apply_intent(&forward_flags(), 0.016);
        assert!((d.length() - s.y).abs() < 1e-6);
    }

    #[test]
    fn velocity_decays_without_reversing() {
        let mut rig = CameraRig::default();
        for _ in 0..10 {
            rig.apply_intent(&forward_flags(), 0.016);
        }
        let start = rig.velocity().z;
        assert!(start < 0.0);
        let idle = IntentFlags::default();
        let mut last = start;
        for dt in [0.016, 0.05, 0.5, 2.0] {
            rig.apply_intent(&idle, dt);
            let v = rig.velocity().z;
            assert!(v <= 0.0 && v >= last);
            last = v;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn sprint_increases_displacement() {
        let mut walk = CameraRig::default();
        let mut run = CameraRig::default();
        let sprint = IntentFlags {
            forward: true,
            sprint: true,
            ..Default::default()
        };
        let w = walk.apply_intent(&forward_flags(), 0.016);
        let r = run.apply_intent(&sprint, 0.016);
        assert!(r.y > w.y);
    }

    #[test]
    fn obstacle_inside_radius_blocks_axis() {
        let mut rig = CameraRig::default();
        let blocked = rig.try_move_axis(MoveAxis::Forward, 0.1, &wall_ahead(0.4));
        assert!(!blocked);
        assert_eq!(rig.position(), Vec3::ZERO);
    }

    #[test]
    fn obstacle_at_radius_commits() {
        let mut rig = CameraRig::default();
        assert!(rig.try_move_axis(MoveAxis::Forward, 0.1, &wall_ahead(0.5)));
        assert!((rig.position().z + 0.1).abs() < 1e-6);
    }

    #[test]
    fn blocked_forward_still_strafes() {
        let mut rig = CameraRig::default();
        let out = rig.try_move(Vec2::new(0.2, 0.2), &wall_ahead(0.3));
        assert!(out.strafe);
        assert!(!out.forward);
        assert!((rig.position().x - 0.2).abs() < 1e-5);
        assert!(rig.position().z.abs() < 1e-5);
    }

    #[test]
    fn backing_away_from_wall_is_allowed() {
        let mut rig = CameraRig::default();
        assert!(rig.try_move_axis(MoveAxis::Forward, -0.1, &wall_ahead(0.3)));
    }

    #[test]
    fn zero_axis_is_not_committed() {
        let mut rig = CameraRig::default();
        assert!(!rig.try_move_axis(MoveAxis::Strafe, 0.0, &()));
    }

    #[test]
    fn push_out_moves_body() {
        let mut rig = CameraRig::default();
        rig.set_position(Vec3::new(0.0, 0.0, -9.5));
        let chest = PointObstacle::new(Vec3::new(0.0, 0.3, -10.0), 0.8);
        assert!(rig.push_out(&[chest]));
        assert!((rig.position().z + 9.2).abs() < 1e-5);
    }

    #[test]
    fn motion_drives_bob_and_sprint() {
        let mut rig = CameraRig::default();
        let sprint = IntentFlags {
            forward: true,
            sprint: true,
            ..Default::default()
        };
        assert!(rig.update_motion(&sprint, 0.05));
        assert!(!rig.update_motion(&sprint, 0.05));
        assert!((rig.sprint_elapsed() - 0.05).abs() < 1e-6);
        assert!(rig.camera().bob_offset > 0.0);
    }

    #[test]
    fn hover_ray_uses_center_when_locked() {
        let rig = CameraRig::default();
        let ray = rig.hover_ray(None).unwrap();
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-5);
        let off = rig.hover_ray(Some(Vec2::new(0.4, 0.0))).unwrap();
        assert!(off.direction().x > 0.0);
    }
}
