use glam::Vec2;

use crate::action::{Action, Motion};

/// Held movement controls. Set by presses, cleared by releases, never by the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl IntentFlags {
    pub fn set(&mut self, motion: Motion, held: bool) {
        match motion {
            Motion::Forward => self.forward = held,
            Motion::Backward => self.backward = held,
            Motion::Left => self.left = held,
            Motion::Right => self.right = held,
            Motion::Sprint => self.sprint = held,
        }
    }

    /// Any directional control held (sprint alone does not move).
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Unit 2D direction: `x` is strafe (right positive), `y` is forward.
    ///
    /// Diagonals are normalized; no input or opposing keys give `Vec2::ZERO`.
    pub fn direction(&self) -> Vec2 {
        let raw = Vec2::new(
            f32::from(u8::from(self.right)) - f32::from(u8::from(self.left)),
            f32::from(u8::from(self.forward)) - f32::from(u8::from(self.backward)),
        );
        raw.normalize_or_zero()
    }
}

/// Everything the tick needs from input, captured once at the start of a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentSnapshot {
    pub flags: IntentFlags,
    /// Accumulated locked-pointer motion since the previous snapshot.
    pub look_delta: Vec2,
    /// Latest cursor position in [-0.5, 0.5].
    pub cursor: Vec2,
    /// Activation clicks since the previous snapshot.
    pub activations: u32,
    /// Most recent pointer-lock change since the previous snapshot.
    pub pointer_lock: Option<bool>,
    /// Inspect overlay toggles since the previous snapshot.
    pub inspect_toggles: u32,
}

impl IntentSnapshot {
    pub fn activated(&self) -> bool {
        self.activations > 0
    }

    /// Net effect of an odd number of toggles.
    pub fn inspect_toggled(&self) -> bool {
        self.inspect_toggles % 2 == 1
    }
}

/// Accumulates actions between ticks.
///
/// Held flags persist across snapshots; per-tick accumulators (look delta,
/// clicks, lock changes, toggles) reset when a snapshot is taken.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    flags: IntentFlags,
    look_delta: Vec2,
    cursor: Vec2,
    activations: u32,
    pointer_lock: Option<bool>,
    inspect_toggles: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::Press(motion) => self.flags.set(*motion, true),
            Action::Release(motion) => self.flags.set(*motion, false),
            Action::Look { dx, dy } => self.look_delta += Vec2::new(*dx, *dy),
            Action::Cursor(pos) => {
                self.cursor = pos.clamp(Vec2::splat(-0.5), Vec2::splat(0.5));
            }
            Action::Activate => self.activations += 1,
            Action::PointerLock(locked) => self.pointer_lock = Some(*locked),
            Action::ToggleInspect => self.inspect_toggles += 1,
            Action::Noop => {}
        }
    }

    pub fn flags(&self) -> IntentFlags {
        self.flags
    }

    /// Drop every held control, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        tracing::debug!("releasing all held controls");
        self.flags = IntentFlags::default();
    }

    /// Capture the current intent and reset per-tick accumulators.
    pub fn take_snapshot(&mut self) -> IntentSnapshot {
        IntentSnapshot {
            flags: self.flags,
            look_delta: std::mem::take(&mut self.look_delta),
            cursor: self.cursor,
            activations: std::mem::take(&mut self.activations),
            pointer_lock: self.pointer_lock.take(),
            inspect_toggles: std::mem::take(&mut self.inspect_toggles),
        }
    }
}
