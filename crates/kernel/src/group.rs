use driftwalk_common::{EntityId, Ray};

use crate::entity::Entity;
use crate::interact::{ActivationContext, FrameTime, Interactable};

/// A named, ordered collection of entities placed together.
///
/// Dispatch fans out to members in insertion order. The group caches whether
/// any member is hovered, which drives its tooltip.
#[derive(Debug, Clone)]
pub struct EntityGroup {
    name: String,
    entities: Vec<Entity>,
    any_hovered: bool,
}

impl EntityGroup {
    pub fn new(name: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self {
            name: name.into(),
            entities,
            any_hovered: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Tooltip shows while any member is hovered.
    pub fn tooltip_visible(&self) -> bool {
        self.any_hovered
    }

    /// Hover fan-out that also reports which members changed state.
    pub fn dispatch_hover(&mut self, ray: &Ray, changes: &mut Vec<(EntityId, bool)>) -> bool {
        let mut any = false;
        for entity in &mut self.entities {
            let before = entity.is_hovered();
            let now = entity.test_hover(ray);
            if before != now {
                changes.push((entity.id, now));
            }
            any |= now;
        }
        self.any_hovered = any;
        any
    }

    /// Clear hover on every member, e.g. while the pointer is unlocked.
    pub fn clear_hover(&mut self, changes: &mut Vec<(EntityId, bool)>) {
        for entity in &mut self.entities {
            let id = entity.id;
            if let Some(hover) = entity.hover_state_mut() {
                if hover.is_hovered {
                    hover.is_hovered = false;
                    changes.push((id, false));
                }
            }
        }
        self.any_hovered = false;
    }
}

impl Interactable for EntityGroup {
    fn update(&mut self, time: &FrameTime) {
        for entity in &mut self.entities {
            entity.update(time);
        }
    }

    fn test_hover(&mut self, ray: &Ray) -> bool {
        let mut changes = Vec::new();
        self.dispatch_hover(ray, &mut changes)
    }

    fn on_activate(&mut self, ctx: &mut ActivationContext) {
        for entity in &mut self.entities {
            entity.on_activate(ctx);
        }
    }

    fn is_hovered(&self) -> bool {
        self.any_hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn plankton_pair() -> EntityGroup {
        EntityGroup::new(
            "plankton",
            vec![
                Entity::plankton("p1", Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO),
                Entity::plankton("p2", Vec3::new(5.0, 0.0, -3.0), Vec3::ZERO),
            ],
        )
    }

    #[test]
    fn any_hovered_is_or_of_members() {
        let mut group = plankton_pair();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert!(group.test_hover(&ray));
        assert!(group.tooltip_visible());
        assert!(group.entities()[0].is_hovered());
        assert!(!group.entities()[1].is_hovered());

        let up = Ray::new(Vec3::ZERO, Vec3::Y).unwrap();
        assert!(!group.test_hover(&up));
        assert!(!group.tooltip_visible());
    }

    #[test]
    fn dispatch_reports_only_changes() {
        let mut group = plankton_pair();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let mut changes = Vec::new();
        group.dispatch_hover(&ray, &mut changes);
        group.dispatch_hover(&ray, &mut changes);
        assert_eq!(changes.len(), 1);
        assert!(changes[0].1);
    }

    #[test]
    fn clear_hover_resets_members() {
        let mut group = plankton_pair();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        group.test_hover(&ray);
        let mut changes = Vec::new();
        group.clear_hover(&mut changes);
        assert_eq!(changes, vec![(group.entities()[0].id, false)]);
        assert!(!group.is_hovered());
    }

    #[test]
    fn insertion_order_is_kept() {
        let group = plankton_pair();
        let names: Vec<&str> = group.entities().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["p1", "p2"]);
    }
}
