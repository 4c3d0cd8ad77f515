use driftwalk_common::{Aabb, BoundingSphere, EntityId, Ray, Transform, smooth_toward};
use glam::{EulerRot, Quat, Vec3};

use crate::interact::{Activation, ActivationContext, FrameTime, Interactable};

/// Hover flag plus a smoothed emphasis value driven by it.
///
/// `current` approaches `emphasized_value` while hovered and `default_value`
/// otherwise, by `transition_rate` of the gap every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    pub is_hovered: bool,
    pub current: f32,
    pub default_value: f32,
    pub emphasized_value: f32,
    pub transition_rate: f32,
    /// Hits farther than this from the ray origin do not count as hover.
    pub max_distance: f32,
}

impl HoverState {
    pub fn new(default_value: f32, emphasized_value: f32, transition_rate: f32, max_distance: f32) -> Self {
        Self {
            is_hovered: false,
            current: default_value,
            default_value,
            emphasized_value,
            transition_rate,
            max_distance,
        }
    }

    pub fn target(&self) -> f32 {
        if self.is_hovered {
            self.emphasized_value
        } else {
            self.default_value
        }
    }

    /// One smoothing step toward the current target.
    pub fn step(&mut self) {
        self.current = smooth_toward(self.current, self.target(), self.transition_rate);
    }

    /// Sphere fast path, gated by distance from the ray origin to the hit point.
    pub fn test(&mut self, ray: &Ray, bounds: &BoundingSphere) -> bool {
        self.is_hovered = match ray.intersect_sphere(bounds) {
            Some(hit) => ray.origin.distance(hit) < self.max_distance,
            None => false,
        };
        self.is_hovered
    }
}

/// Constant-rate Euler spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub angles: Vec3,
    /// Radians per second about X, Y, Z.
    pub rate: Vec3,
}

/// Looping playback of a model's first clip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub clip: String,
    pub duration: f32,
    pub time: f32,
    pub playback_rate: f32,
}

impl AnimationState {
    pub fn advance(&mut self, dt: f32) {
        if self.duration <= 0.0 {
            return;
        }
        self.time = (self.time + dt * self.playback_rate).rem_euclid(self.duration);
    }
}

/// Behaviour variant of an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Inert geometry; may block movement.
    Static { collider: Option<Aabb> },
    /// Purely time-driven motion.
    Decorative(Spin),
    /// Skinned model playing a clip; `None` when the model carries no clip.
    Animated(Option<AnimationState>),
    /// Hover-reactive prop with an optional breathing scale pulse.
    Hoverable { hover: HoverState, pulse: bool },
    /// Hover-reactive prop that can be picked up once.
    Collectible {
        hover: HoverState,
        collected: bool,
        /// Radius of the push-out sphere around the prop; 0 disables it.
        push_radius: f32,
    },
}

/// A single scene actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub transform: Transform,
    pub bounds: Option<BoundingSphere>,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(name: impl Into<String>, transform: Transform, kind: EntityKind) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            transform,
            bounds: None,
            kind,
        }
    }

    pub fn with_bounds(mut self, radius: f32) -> Self {
        self.bounds = Some(BoundingSphere::new(self.transform.position, radius));
        self
    }

    pub fn hover_state(&self) -> Option<&HoverState> {
        match &self.kind {
            EntityKind::Hoverable { hover, .. } | EntityKind::Collectible { hover, .. } => Some(hover),
            _ => None,
        }
    }

    pub fn hover_state_mut(&mut self) -> Option<&mut HoverState> {
        match &mut self.kind {
            EntityKind::Hoverable { hover, .. } | EntityKind::Collectible { hover, .. } => Some(hover),
            _ => None,
        }
    }

    /// Current smoothed emphasis, for entities that have one.
    pub fn emphasis(&self) -> Option<f32> {
        self.hover_state().map(|h| h.current)
    }

    pub fn collider(&self) -> Option<Aabb> {
        match &self.kind {
            EntityKind::Static { collider } => *collider,
            _ => None,
        }
    }

    /// Center and minimum distance of the push-out sphere, if any.
    /// A collected prop is gone and no longer pushes.
    pub fn point_obstacle(&self) -> Option<(Vec3, f32)> {
        match &self.kind {
            EntityKind::Collectible {
                push_radius,
                collected: false,
                ..
            } if *push_radius > 0.0 => {
                Some((self.transform.position, *push_radius))
            }
            _ => None,
        }
    }

    pub fn is_collected(&self) -> bool {
        matches!(self.kind, EntityKind::Collectible { collected: true, .. })
    }
}

impl Interactable for Entity {
    fn update(&mut self, time: &FrameTime) {
        match &mut self.kind {
            EntityKind::Static { .. } => {}
            EntityKind::Decorative(spin) => {
                spin.angles += spin.rate * time.delta;
                self.transform.rotation =
                    Quat::from_euler(EulerRot::XYZ, spin.angles.x, spin.angles.y, spin.angles.z);
            }
            EntityKind::Animated(animation) => {
                if let Some(animation) = animation {
                    animation.advance(time.delta);
                }
            }
            EntityKind::Hoverable { hover, pulse } => {
                if *pulse {
                    let s = time.elapsed.sin().abs() / 20.0 + 1.0;
                    self.transform.scale = Vec3::splat(s);
                }
                hover.step();
            }
            EntityKind::Collectible { hover, .. } => hover.step(),
        }
    }

    fn test_hover(&mut self, ray: &Ray) -> bool {
        let bounds = self.bounds;
        match &mut self.kind {
            EntityKind::Hoverable { hover, .. }
            | EntityKind::Collectible {
                hover,
                collected: false,
                ..
            } => match bounds {
                Some(bounds) => hover.test(ray, &bounds),
                None => {
                    hover.is_hovered = false;
                    false
                }
            },
            EntityKind::Collectible { hover, .. } => {
                hover.is_hovered = false;
                false
            }
            _ => false,
        }
    }

    fn on_activate(&mut self, ctx: &mut ActivationContext) {
        if let EntityKind::Collectible {
            hover, collected, ..
        } = &mut self.kind
        {
            if hover.is_hovered && !*collected {
                *collected = true;
                hover.is_hovered = false;
                tracing::info!(entity = %self.id.short(), name = %self.name, "collected");
                ctx.record(Activation::Collected {
                    id: self.id,
                    name: self.name.clone(),
                });
                ctx.record(Activation::InspectRequested { id: self.id });
            }
        }
    }

    fn is_hovered(&self) -> bool {
        self.hover_state().is_some_and(|h| h.is_hovered)
    }
}
