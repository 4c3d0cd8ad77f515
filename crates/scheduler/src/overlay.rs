/// Flags and strings the UI layer reads each frame. The core never owns layout.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    pub loading_visible: bool,
    pub loading_percent: u32,
    pub enter_visible: bool,
    pub tooltip_visible: bool,
    pub pause_visible: bool,
    pub inspect_open: bool,
    pub hint: Option<String>,
    pub fps: f32,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            loading_visible: true,
            loading_percent: 0,
            enter_visible: false,
            tooltip_visible: false,
            pause_visible: false,
            inspect_open: false,
            hint: None,
            fps: 0.0,
        }
    }
}

impl OverlayState {
    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = Some(hint.into());
    }

    pub fn clear_hint(&mut self) {
        self.hint = None;
    }

    /// Loading finished: swap the progress bar for the enter button.
    pub fn show_enter(&mut self) {
        self.loading_percent = 100;
        self.loading_visible = false;
        self.enter_visible = true;
        self.set_hint("Click to enter");
    }

    /// The player entered: hide the title layers.
    pub fn entered(&mut self) {
        self.enter_visible = false;
        self.pause_visible = false;
        self.set_hint("WASD to move, Shift to sprint");
    }
}
