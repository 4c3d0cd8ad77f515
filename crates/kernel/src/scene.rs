use std::f32::consts::FRAC_PI_2;

use driftwalk_assets::ResourceCatalog;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::group::EntityGroup;

pub const PLANKTON_MODEL: &str = "plankton1Model";
pub const LEAVES_MODEL: &str = "FallingLeaves";

/// Name of the entity the proximity loop measures against in the backrooms.
pub const CHEST_NAME: &str = "chest";

/// Which level to place once resources are ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    /// Plankton, falling leaves and spinning stems over the water floor.
    #[default]
    Underwater,
    /// A narrow walled corridor ending in the collectible chest.
    Backrooms,
}

impl ScenePreset {
    /// Build the groups for this preset. Groups whose model is missing from
    /// the catalog are skipped with a warning.
    pub fn build(self, catalog: &ResourceCatalog) -> Vec<EntityGroup> {
        match self {
            Self::Underwater => underwater(catalog),
            Self::Backrooms => backrooms(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Underwater => "underwater",
            Self::Backrooms => "backrooms",
        }
    }
}

fn underwater(catalog: &ResourceCatalog) -> Vec<EntityGroup> {
    let mut groups = Vec::new();
    let facing = Vec3::new(0.0, -FRAC_PI_2, 0.0);

    if catalog.contains(PLANKTON_MODEL) {
        groups.push(EntityGroup::new(
            "plankton",
            vec![
                Entity::plankton("plankton_1", Vec3::new(0.0, 0.5, -3.0), facing),
                Entity::plankton("plankton_2", Vec3::new(5.0, 0.5, -3.0), facing),
            ],
        ));
    } else {
        tracing::warn!(model = PLANKTON_MODEL, "model missing, plankton group skipped");
    }

    if catalog.contains(LEAVES_MODEL) {
        let clip = catalog.first_clip(LEAVES_MODEL);
        groups.push(EntityGroup::new(
            "falling_leaves",
            vec![Entity::falling_leaves(
                Vec3::new(0.0, 0.0, -2.0),
                Vec3::ZERO,
                clip,
            )],
        ));
    } else {
        tracing::warn!(model = LEAVES_MODEL, "model missing, falling leaves skipped");
    }

    groups.push(EntityGroup::new(
        "stems",
        vec![
            Entity::stem("stem_1", Vec3::new(2.0, 0.5, -11.0)),
            Entity::stem("stem_2", Vec3::new(0.0, 0.5, -11.0)),
        ],
    ));
    groups
}

fn backrooms() -> Vec<EntityGroup> {
    vec![
        EntityGroup::new(
            "walls",
            vec![
                Entity::wall(
                    "wall_left",
                    Vec3::new(-1.5, 0.5, -6.0),
                    Vec3::ZERO,
                    Vec3::new(1.0, 2.0, 12.0),
                ),
                Entity::wall(
                    "wall_right",
                    Vec3::new(1.5, 0.5, -6.0),
                    Vec3::ZERO,
                    Vec3::new(1.0, 2.0, 12.0),
                ),
                Entity::wall(
                    "wall_back",
                    Vec3::new(0.0, 0.5, -12.5),
                    Vec3::ZERO,
                    Vec3::new(4.0, 2.0, 1.0),
                ),
            ],
        ),
        EntityGroup::new(CHEST_NAME, vec![Entity::chest(Vec3::new(0.0, 0.3, -10.0))]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftwalk_assets::{AnimationClip, LoadedItem, SourceKind};

    fn full_catalog() -> ResourceCatalog {
        let mut catalog = ResourceCatalog::new();
        catalog.insert(PLANKTON_MODEL, LoadedItem::placeholder(SourceKind::GltfModel));
        catalog.insert(
            LEAVES_MODEL,
            LoadedItem::Model {
                animations: vec![AnimationClip {
                    name: "fall".into(),
                    duration: 4.0,
                }],
            },
        );
        catalog
    }

    #[test]
    fn underwater_places_all_groups() {
        let groups = ScenePreset::Underwater.build(&full_catalog());
        let names: Vec<&str> = groups.iter().map(EntityGroup::name).collect();
        assert_eq!(names, ["plankton", "falling_leaves", "stems"]);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn missing_models_degrade() {
        let groups = ScenePreset::Underwater.build(&ResourceCatalog::new());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name(), "stems");
    }

    #[test]
    fn backrooms_has_walls_and_chest() {
        let groups = ScenePreset::Backrooms.build(&ResourceCatalog::new());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 3);
        assert!(groups[0].entities().iter().all(|e| e.collider().is_some()));
        assert_eq!(groups[1].entities()[0].name, CHEST_NAME);
    }

    #[test]
    fn preset_names_round_trip_through_serde() {
        let preset: ScenePreset = serde_json::from_str("\"backrooms\"").unwrap();
        assert_eq!(preset, ScenePreset::Backrooms);
        assert_eq!(preset.name(), "backrooms");
    }
}
