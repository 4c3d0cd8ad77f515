use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A held movement control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    Forward,
    Backward,
    Left,
    Right,
    Sprint,
}

/// A logical action produced by the input collaborator.
///
/// The rig and the world consume actions, never raw key or pointer events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A movement control went down.
    Press(Motion),
    /// A movement control was released.
    Release(Motion),
    /// Relative pointer motion in pixels while the pointer is locked.
    Look { dx: f32, dy: f32 },
    /// Absolute cursor position, normalized to [-0.5, 0.5] on both axes.
    Cursor(Vec2),
    /// Primary click / activation trigger.
    Activate,
    /// Pointer lock was acquired (`true`) or lost (`false`).
    PointerLock(bool),
    /// Open or close the inspection overlay.
    ToggleInspect,
    /// Unbound input.
    Noop,
}
