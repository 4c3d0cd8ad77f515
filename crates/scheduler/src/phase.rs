use serde::{Deserialize, Serialize};

/// Coarse game state.
///
/// `Idle` until the first start action, then `Running`. Losing pointer lock
/// while running pauses; regaining it resumes. There is no way back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Idle,
    Running,
    Paused,
}

impl GamePhase {
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    pub fn has_started(self) -> bool {
        self != Self::Idle
    }

    /// Phase after a start action. Only `Idle` changes.
    pub fn on_start(self) -> Self {
        match self {
            Self::Idle => Self::Running,
            other => other,
        }
    }

    /// Phase after a pointer-lock change. Has no effect before the game starts.
    pub fn on_pointer_lock(self, locked: bool) -> Self {
        match (self, locked) {
            (Self::Running, false) => Self::Paused,
            (Self::Paused, true) => Self::Running,
            (other, _) => other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_idempotent() {
        let p = GamePhase::Idle.on_start();
        assert_eq!(p, GamePhase::Running);
        assert_eq!(p.on_start(), GamePhase::Running);
        assert_eq!(GamePhase::Paused.on_start(), GamePhase::Paused);
    }

    #[test]
    fn lock_changes_pause_and_resume() {
        let paused = GamePhase::Running.on_pointer_lock(false);
        assert_eq!(paused, GamePhase::Paused);
        assert_eq!(paused.on_pointer_lock(false), GamePhase::Paused);
        assert_eq!(paused.on_pointer_lock(true), GamePhase::Running);
    }

    #[test]
    fn lock_before_start_is_ignored() {
        assert_eq!(GamePhase::Idle.on_pointer_lock(true), GamePhase::Idle);
        assert_eq!(GamePhase::Idle.on_pointer_lock(false), GamePhase::Idle);
        assert!(!GamePhase::Idle.has_started());
    }
}
