use std::collections::BTreeMap;

use driftwalk_common::{Aabb, EntityId, ObstacleSet, Ray};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::group::EntityGroup;
use crate::interact::{Activation, ActivationContext, FrameTime, Interactable};

/// An event record produced by world mutations the rest of the loop cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// Groups were constructed after the resource-ready signal.
    Initialized { groups: usize, entities: usize },
    /// An entity's hover flag flipped.
    HoverChanged { id: EntityId, hovered: bool },
    /// A collectible was picked up.
    Collected { id: EntityId, name: String },
    /// An entity asked for the inspection overlay.
    InspectRequested { id: EntityId },
}

/// Errors from world lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("duplicate group name: {0}")]
    DuplicateGroup(String),
    #[error("world already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Default)]
enum Lifecycle {
    #[default]
    Uninitialized,
    Ready(BTreeMap<String, EntityGroup>),
}

/// The set of entity groups the frame loop updates and dispatches into.
///
/// Groups exist only after `initialize`, which the host calls once resources
/// are ready. Until then every dispatch method is a silent no-op.
///
/// Uses BTreeMap so group iteration order is the same on every platform.
#[derive(Debug, Default)]
pub struct World {
    lifecycle: Lifecycle,
    frame: u64,
    /// Append-only log, drained by the scheduler each tick.
    event_log: Vec<WorldEvent>,
}

impl World {
    /// Create an uninitialized world.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready(_))
    }

    /// Number of updates applied since initialization.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Install the groups. Fails on duplicate names or a second call.
    pub fn initialize(&mut self, groups: Vec<EntityGroup>) -> Result<(), WorldError> {
        if self.is_ready() {
            return Err(WorldError::AlreadyInitialized);
        }
        let mut map = BTreeMap::new();
        for group in groups {
            let name = group.name().to_string();
            if map.contains_key(&name) {
                return Err(WorldError::DuplicateGroup(name));
            }
            tracing::debug!(group = %name, members = group.len(), "group spawned");
            map.insert(name, group);
        }
        let entities = map.values().map(EntityGroup::len).sum();
        let groups = map.len();
        self.lifecycle = Lifecycle::Ready(map);
        self.event_log
            .push(WorldEvent::Initialized { groups, entities });
        tracing::info!(groups, entities, "world initialized");
        Ok(())
    }

    fn groups_mut(&mut self) -> Option<&mut BTreeMap<String, EntityGroup>> {
        match &mut self.lifecycle {
            Lifecycle::Ready(groups) => Some(groups),
            Lifecycle::Uninitialized => None,
        }
    }

    /// Groups in name order. Empty before initialization.
    pub fn groups(&self) -> impl Iterator<Item = &EntityGroup> {
        let groups = match &self.lifecycle {
            Lifecycle::Ready(groups) => Some(groups.values()),
            Lifecycle::Uninitialized => None,
        };
        groups.into_iter().flatten()
    }

    pub fn group(&self, name: &str) -> Option<&EntityGroup> {
        match &self.lifecycle {
            Lifecycle::Ready(groups) => groups.get(name),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.groups().flat_map(|g| g.entities().iter())
    }

    pub fn entity_count(&self) -> usize {
        self.groups().map(EntityGroup::len).sum()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities().find(|e| e.id == id)
    }

    /// First entity with the given name, in group order.
    pub fn find_entity(&self, name: &str) -> Option<&Entity> {
        self.entities().find(|e| e.name == name)
    }

    /// Advance every entity. No-op before initialization.
    pub fn update(&mut self, time: &FrameTime) {
        let Some(groups) = self.groups_mut() else {
            return;
        };
        for group in groups.values_mut() {
            group.update(time);
        }
        self.frame += 1;
    }

    /// Hover fan-out to every group. Returns whether anything is hovered.
    pub fn handle_intersections(&mut self, ray: &Ray) -> bool {
        let mut changes = Vec::new();
        let Some(groups) = self.groups_mut() else {
            return false;
        };
        let mut any = false;
        for group in groups.values_mut() {
            any |= group.dispatch_hover(ray, &mut changes);
        }
        self.log_hover_changes(changes);
        any
    }

    /// Drop hover everywhere, e.g. while the pointer is unlocked.
    pub fn clear_hover(&mut self) {
        let mut changes = Vec::new();
        let Some(groups) = self.groups_mut() else {
            return;
        };
        for group in groups.values_mut() {
            group.clear_hover(&mut changes);
        }
        self.log_hover_changes(changes);
    }

    /// Activation fan-out. Returns the number of outcomes produced.
    pub fn handle_click(&mut self) -> usize {
        let mut ctx = ActivationContext::new();
        let Some(groups) = self.groups_mut() else {
            return 0;
        };
        for group in groups.values_mut() {
            group.on_activate(&mut ctx);
        }
        let outcomes = ctx.into_outcomes();
        let count = outcomes.len();
        for outcome in outcomes {
            self.event_log.push(match outcome {
                Activation::Collected { id, name } => WorldEvent::Collected { id, name },
                Activation::InspectRequested { id } => WorldEvent::InspectRequested { id },
            });
        }
        count
    }

    fn log_hover_changes(&mut self, changes: Vec<(EntityId, bool)>) {
        for (id, hovered) in changes {
            tracing::trace!(entity = %id.short(), hovered, "hover changed");
            self.event_log
                .push(WorldEvent::HoverChanged { id, hovered });
        }
    }

    /// Per-group tooltip visibility, in group order.
    pub fn hover_summary(&self) -> Vec<(&str, bool)> {
        self.groups()
            .map(|g| (g.name(), g.tooltip_visible()))
            .collect()
    }

    pub fn any_hovered(&self) -> bool {
        self.groups().any(|g| g.tooltip_visible())
    }

    /// World-space boxes of every static collider.
    pub fn colliders(&self) -> Vec<Aabb> {
        self.entities().filter_map(Entity::collider).collect()
    }

    /// Colliders packaged for the camera rig.
    pub fn obstacle_set(&self) -> ObstacleSet {
        ObstacleSet::new(self.colliders())
    }

    /// Push-out spheres as `(center, min_dist)`.
    pub fn point_obstacles(&self) -> Vec<(Vec3, f32)> {
        self.entities().filter_map(Entity::point_obstacle).collect()
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }
}
