use driftwalk_common::EntityId;
use driftwalk_kernel::{Entity, EntityKind, World};

/// World inspector for developer tooling.
///
/// Provides read-only queries against the world state for debugging
/// and headless runs.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        WorldSummary {
            ready: world.is_ready(),
            frame: world.frame(),
            group_count: world.groups().count(),
            entity_count: world.entity_count(),
            pending_events: world.events().len(),
            hovered_groups: world
                .hover_summary()
                .into_iter()
                .filter(|(_, hovered)| *hovered)
                .map(|(name, _)| name.to_string())
                .collect(),
        }
    }

    /// Describe one entity, including the group it belongs to.
    pub fn inspect_entity(world: &World, id: EntityId) -> Option<EntityInfo> {
        world.groups().find_map(|group| {
            group
                .get(id)
                .map(|entity| EntityInfo::from_entity(group.name(), entity))
        })
    }

    /// All entities, in group order then insertion order.
    pub fn list_entities(world: &World) -> Vec<EntityInfo> {
        world
            .groups()
            .flat_map(|group| {
                group
                    .entities()
                    .iter()
                    .map(move |entity| EntityInfo::from_entity(group.name(), entity))
            })
            .collect()
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone)]
pub struct WorldSummary {
    pub ready: bool,
    pub frame: u64,
    pub group_count: usize,
    pub entity_count: usize,
    pub pending_events: usize,
    pub hovered_groups: Vec<String>,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: ready={} frame={} groups={} entities={} pending_events={}",
            self.ready, self.frame, self.group_count, self.entity_count, self.pending_events
        )?;
        if !self.hovered_groups.is_empty() {
            write!(f, " hovered=[{}]", self.hovered_groups.join(", "))?;
        }
        Ok(())
    }
}

/// Detailed info about a single entity.
#[derive(Debug, Clone)]
pub struct EntityInfo {
    pub id: EntityId,
    pub name: String,
    pub group: String,
    pub kind: &'static str,
    pub position: [f32; 3],
    pub emphasis: Option<f32>,
    pub hovered: bool,
    pub collected: bool,
}

impl EntityInfo {
    fn from_entity(group: &str, entity: &Entity) -> Self {
        let p = entity.transform.position;
        Self {
            id: entity.id,
            name: entity.name.clone(),
            group: group.to_string(),
            kind: kind_label(&entity.kind),
            position: [p.x, p.y, p.z],
            emphasis: entity.emphasis(),
            hovered: entity.hover_state().is_some_and(|h| h.is_hovered),
            collected: entity.is_collected(),
        }
    }
}

fn kind_label(kind: &EntityKind) -> &'static str {
    match kind {
        EntityKind::Static { .. } => "static",
        EntityKind::Decorative(_) => "decorative",
        EntityKind::Animated(_) => "animated",
        EntityKind::Hoverable { .. } => "hoverable",
        EntityKind::Collectible { .. } => "collectible",
    }
}

impl std::fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entity [{}] {}/{} {} pos=({:.2}, {:.2}, {:.2})",
            self.id.short(),
            self.group,
            self.name,
            self.kind,
            self.position[0],
            self.position[1],
            self.position[2],
        )?;
        if let Some(emphasis) = self.emphasis {
            write!(f, " emphasis={emphasis:.3}")?;
        }
        if self.hovered {
            write!(f, " hovered")?;
        }
        if self.collected {
            write!(f, " collected")?;
        }
        Ok(())
    }
}
