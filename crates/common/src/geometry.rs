use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A half-line with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Returns `None` for a zero-length direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest intersection point with a sphere in front of the origin.
    ///
    /// When the origin is inside the sphere the exit point is returned.
    pub fn intersect_sphere(&self, sphere: &BoundingSphere) -> Option<Vec3> {
        let to_center = sphere.center - self.origin;
        let tca = to_center.dot(self.direction);
        let d2 = to_center.length_squared() - tca * tca;
        let r2 = sphere.radius * sphere.radius;
        if d2 > r2 {
            return None;
        }
        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;
        if t1 < 0.0 {
            return None;
        }
        let t = if t0 < 0.0 { t1 } else { t0 };
        Some(self.at(t))
    }

    /// Distance along the ray to an axis-aligned box, using the slab method.
    ///
    /// Returns the entry distance, or the exit distance when the origin is inside.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let inv = |d: f32| {
            if d.abs() > 1e-10 {
                1.0 / d
            } else {
                f32::MAX * d.signum()
            }
        };
        let inv_dir = Vec3::new(
            inv(self.direction.x),
            inv(self.direction.y),
            inv(self.direction.z),
        );

        let t1 = (aabb.min - self.origin) * inv_dir;
        let t2 = (aabb.max - self.origin) * inv_dir;
        let t_min = t1.min(t2).max_element();
        let t_max = t1.max(t2).min_element();

        if t_max >= t_min && t_max >= 0.0 {
            if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
        } else {
            None
        }
    }
}

/// Sphere used as a fast hover/pick volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// World-space bounds of a box with local `half_extents` rotated by `rotation`.
    pub fn from_oriented_box(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        let m = Mat3::from_quat(rotation);
        let abs = Mat3::from_cols(m.x_axis.abs(), m.y_axis.abs(), m.z_axis.abs());
        Self::from_center_half_extents(center, abs * half_extents)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// A borrowed-by-reference list of static boxes that block movement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSet {
    boxes: Vec<Aabb>,
}

impl ObstacleSet {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn push(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Distance to the nearest box along `ray`, if any.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<f32> {
        self.boxes
            .iter()
            .filter_map(|b| ray.intersect_aabb(b))
            .min_by(f32::total_cmp)
    }
}
