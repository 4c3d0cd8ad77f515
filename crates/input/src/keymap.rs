use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::{Action, Motion};

/// Maps physical key codes (DOM `KeyboardEvent.code` names) to movement controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keymap {
    bindings: BTreeMap<String, Motion>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = BTreeMap::new();
        for (code, motion) in [
            ("KeyW", Motion::Forward),
            ("ArrowUp", Motion::Forward),
            ("KeyS", Motion::Backward),
            ("ArrowDown", Motion::Backward),
            ("KeyA", Motion::Left),
            ("ArrowLeft", Motion::Left),
            ("KeyD", Motion::Right),
            ("ArrowRight", Motion::Right),
            ("ShiftLeft", Motion::Sprint),
            ("ShiftRight", Motion::Sprint),
        ] {
            bindings.insert(code.to_string(), motion);
        }
        Self { bindings }
    }
}

impl Keymap {
    /// An empty keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, code: impl Into<String>, motion: Motion) {
        self.bindings.insert(code.into(), motion);
    }

    pub fn motion_for(&self, code: &str) -> Option<Motion> {
        self.bindings.get(code).copied()
    }

    /// Translate a key transition into an action. Unbound keys become `Noop`.
    pub fn translate(&self, code: &str, pressed: bool) -> Action {
        match self.motion_for(code) {
            Some(motion) if pressed => Action::Press(motion),
            Some(motion) => Action::Release(motion),
            None => Action::Noop,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_wasd_and_arrows() {
        let map = Keymap::default();
        assert_eq!(map.motion_for("KeyW"), Some(Motion::Forward));
        assert_eq!(map.motion_for("ArrowLeft"), Some(Motion::Left));
        assert_eq!(map.motion_for("ShiftRight"), Some(Motion::Sprint));
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn translate_press_and_release() {
        let map = Keymap::default();
        assert_eq!(map.translate("KeyD", true), Action::Press(Motion::Right));
        assert_eq!(map.translate("KeyD", false), Action::Release(Motion::Right));
    }

    #[test]
    fn unbound_key_is_noop() {
        let map = Keymap::default();
        assert_eq!(map.translate("KeyQ", true), Action::Noop);
    }

    #[test]
    fn custom_binding_overrides() {
        let mut map = Keymap::empty();
        assert!(map.is_empty());
        map.bind("KeyZ", Motion::Forward);
        assert_eq!(map.translate("KeyZ", true), Action::Press(Motion::Forward));
    }

    #[test]
    fn keymap_deserializes_from_json() {
        let json = r#"{"bindings":{"KeyI":"forward","KeyK":"backward"}}"#;
        let map: Keymap = serde_json::from_str(json).unwrap();
        assert_eq!(map.motion_for("KeyI"), Some(Motion::Forward));
        assert_eq!(map.motion_for("KeyW"), None);
    }
}
