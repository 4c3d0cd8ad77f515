//! Secondary motion: head bob and the sprint timer.

/// Vertical eye offset that follows footfalls and settles when the player stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadBob {
    pub amplitude: f32,
    pub frequency: f32,
    pub settle_threshold: f32,
    phase: f32,
    offset: f32,
}

impl HeadBob {
    pub fn new(amplitude: f32, frequency: f32, settle_threshold: f32) -> Self {
        Self {
            amplitude,
            frequency,
            settle_threshold,
            phase: 0.0,
            offset: 0.0,
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_resting(&self) -> bool {
        self.phase == 0.0 && self.offset == 0.0
    }

    /// Advance by `dt`. `rate` is current speed over walking speed; ignored when not moving.
    ///
    /// A stopped bob keeps cycling at walking rate until it reaches the bottom
    /// of the cycle, so the eye never pops.
    pub fn update(&mut self, dt: f32, moving: bool, rate: f32) {
        if moving {
            self.phase += dt * rate;
        } else if self.is_resting() {
            return;
        } else {
            self.phase += dt;
        }
        self.offset = self.amplitude * (1.0 - (self.phase * self.frequency).cos()) * 0.5;
        if !moving && self.offset < self.settle_threshold {
            self.phase = 0.0;
            self.offset = 0.0;
        }
    }
}

/// Seconds sprint has been held, reset on each sprint start.
///
/// The value survives release so a host can read how long the last sprint lasted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SprintTimer {
    elapsed: f32,
    was_sprinting: bool,
}

impl SprintTimer {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns true on the tick sprint starts.
    pub fn update(&mut self, sprinting: bool, dt: f32) -> bool {
        let started = sprinting && !self.was_sprinting;
        if started {
            self.elapsed = 0.0;
            tracing::debug!("sprint started");
        } else if sprinting {
            self.elapsed += dt;
        }
        self.was_sprinting = sprinting;
        started
    }
}
