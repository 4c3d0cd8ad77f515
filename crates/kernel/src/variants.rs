//! Constructors for the concrete props placed by the scene presets.

use driftwalk_assets::AnimationClip;
use driftwalk_common::{Aabb, Transform};
use glam::Vec3;

use crate::entity::{AnimationState, Entity, EntityKind, HoverState, Spin};

/// Emphasis (metalness) resting at 2 and rising to 3 on hover, within 4 units.
pub const PLANKTON_HOVER: HoverState = HoverState {
    is_hovered: false,
    current: 2.0,
    default_value: 2.0,
    emphasized_value: 3.0,
    transition_rate: 0.1,
    max_distance: 4.0,
};

pub const PLANKTON_RADIUS: f32 = 0.5;
pub const LEAVES_PLAYBACK_RATE: f32 = 0.5;
pub const CHEST_RADIUS: f32 = 0.6;
pub const CHEST_PUSH_RADIUS: f32 = 0.8;

impl Entity {
    /// Breathing, hover-highlighted plankton model.
    pub fn plankton(name: impl Into<String>, position: Vec3, euler: Vec3) -> Self {
        Self::new(
            name,
            Transform::from_position_euler(position, euler),
            EntityKind::Hoverable {
                hover: PLANKTON_HOVER,
                pulse: true,
            },
        )
        .with_bounds(PLANKTON_RADIUS)
    }

    /// Falling leaves model; plays its first clip at half speed when it has one.
    pub fn falling_leaves(position: Vec3, euler: Vec3, clip: Option<&AnimationClip>) -> Self {
        let animation = clip.map(|clip| AnimationState {
            clip: clip.name.clone(),
            duration: clip.duration,
            time: 0.0,
            playback_rate: LEAVES_PLAYBACK_RATE,
        });
        Self::new(
            "falling_leaves",
            Transform::from_position_euler(position, euler),
            EntityKind::Animated(animation),
        )
    }

    /// Small glassy icosahedron spinning about X and Y at one radian per second.
    pub fn stem(name: impl Into<String>, position: Vec3) -> Self {
        Self::new(
            name,
            Transform::from_position(position),
            EntityKind::Decorative(Spin {
                angles: Vec3::ZERO,
                rate: Vec3::new(1.0, 1.0, 0.0),
            }),
        )
    }

    /// Box wall of full `size`, blocking movement with its world-space bounds.
    pub fn wall(name: impl Into<String>, position: Vec3, euler: Vec3, size: Vec3) -> Self {
        let transform = Transform::from_position_euler(position, euler);
        let collider = Aabb::from_oriented_box(position, size * 0.5, transform.rotation);
        Self::new(
            name,
            transform,
            EntityKind::Static {
                collider: Some(collider),
            },
        )
    }

    /// The collectible chest: hover to highlight, click to collect and inspect.
    pub fn chest(position: Vec3) -> Self {
        Self::new(
            "chest",
            Transform::from_position(position),
            EntityKind::Collectible {
                hover: HoverState::new(0.0, 1.0, 0.15, 4.0),
                collected: false,
                push_radius: CHEST_PUSH_RADIUS,
            },
        )
        .with_bounds(CHEST_RADIUS)
    }
}
