use driftwalk_common::{EPSILON, ObstacleSet, Ray};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Anything the rig can cast movement rays against. The rig only borrows it.
pub trait Obstacles {
    /// Distance to the nearest hit along `ray`, if any.
    fn raycast(&self, ray: &Ray) -> Option<f32>;
}

impl Obstacles for ObstacleSet {
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        self.nearest_hit(ray)
    }
}

/// No obstacles at all.
impl Obstacles for () {
    fn raycast(&self, _ray: &Ray) -> Option<f32> {
        None
    }
}

/// A point the player may not come closer to than `min_dist` on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointObstacle {
    pub center: Vec3,
    pub min_dist: f32,
}

impl PointObstacle {
    pub fn new(center: Vec3, min_dist: f32) -> Self {
        Self { center, min_dist }
    }
}

impl From<(Vec3, f32)> for PointObstacle {
    fn from((center, min_dist): (Vec3, f32)) -> Self {
        Self::new(center, min_dist)
    }
}

/// Project `position` out of every obstacle's exclusion circle. Height is untouched.
///
/// Returns whether any correction was applied. A position exactly on a
/// center has no direction to push along and is left as is.
pub fn push_out(position: &mut Vec3, points: &[PointObstacle]) -> bool {
    let mut moved = false;
    for p in points {
        let dx = position.x - p.center.x;
        let dz = position.z - p.center.z;
        let dist = (dx * dx + dz * dz).sqrt();
        if dist < EPSILON || dist >= p.min_dist {
            continue;
        }
        let scale = p.min_dist / dist;
        position.x = p.center.x + dx * scale;
        position.z = p.center.z + dz * scale;
        moved = true;
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_is_projected_to_boundary() {
        let mut pos = Vec3::new(0.3, 1.0, 0.4);
        let moved = push_out(&mut pos, &[PointObstacle::new(Vec3::ZERO, 1.0)]);
        assert!(moved);
        let horizontal = (pos.x * pos.x + pos.z * pos.z).sqrt();
        assert!((horizontal - 1.0).abs() < 1e-5);
        assert_eq!(pos.y, 1.0);
        // direction preserved
        assert!((pos.x / pos.z - 0.75).abs() < 1e-5);
    }

    #[test]
    fn outside_is_untouched() {
        let mut pos = Vec3::new(2.0, 0.0, 0.0);
        assert!(!push_out(&mut pos, &[PointObstacle::new(Vec3::ZERO, 1.0)]));
        assert_eq!(pos, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn coincident_position_is_skipped() {
        let mut pos = Vec3::new(0.0, 0.5, 0.0);
        assert!(!push_out(&mut pos, &[PointObstacle::new(Vec3::ZERO, 1.0)]));
        assert_eq!(pos, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn vertical_offset_does_not_count() {
        // Center well above the player still pushes on the ground plane.
        let mut pos = Vec3::new(0.5, 0.0, 0.0);
        push_out(&mut pos, &[PointObstacle::new(Vec3::new(0.0, 3.0, 0.0), 0.8)]);
        assert!((pos.x - 0.8).abs() < 1e-5);
    }

    #[test]
    fn empty_set_never_hits() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        assert!(().raycast(&ray).is_none());
        assert!(ObstacleSet::default().raycast(&ray).is_none());
    }
}
