//! World Kernel: interactable entities, their groups, and the world that dispatches into them.
//!
//! # Invariants
//! - Nothing is dispatched before `World::initialize`; until then every call is a no-op.
//! - Group names are unique and groups iterate in name order; members keep insertion order.
//! - Emphasis smoothing runs on every update, whether or not a hover ray was cast.
//! - All state mutations flow through explicit operations and are mirrored in the event log.

pub mod entity;
pub mod group;
pub mod interact;
pub mod scene;
pub mod variants;
pub mod world;

pub use entity::{AnimationState, Entity, EntityKind, HoverState, Spin};
pub use group::EntityGroup;
pub use interact::{Activation, ActivationContext, FrameTime, Interactable};
pub use scene::{CHEST_NAME, ScenePreset};
pub use world::{World, WorldError, WorldEvent};
