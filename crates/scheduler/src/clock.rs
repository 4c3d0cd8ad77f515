use std::time::Duration;

use driftwalk_kernel::FrameTime;

/// Turns raw host deltas into clamped frame times.
///
/// A long stall (tab in background, debugger) is clamped to `max_delta`
/// so the rig and the animations never take one huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_delta: f32,
    elapsed: f32,
    last: FrameTime,
}

/// Largest per-tick delta any configuration may ask for, seconds.
pub const MAX_DELTA_CEILING: f32 = 1.0;

impl FrameClock {
    /// `max_delta` is bounded to `[0, MAX_DELTA_CEILING]`; a non-finite bound takes the ceiling.
    pub fn new(max_delta: f32) -> Self {
        let max_delta = if max_delta.is_finite() {
            max_delta.clamp(0.0, MAX_DELTA_CEILING)
        } else {
            MAX_DELTA_CEILING
        };
        Self {
            max_delta,
            elapsed: 0.0,
            last: FrameTime::default(),
        }
    }

    /// Advance by a raw host delta in seconds. Negative or NaN deltas count as zero.
    pub fn advance(&mut self, raw_delta: f32) -> FrameTime {
        let delta = if raw_delta.is_nan() {
            0.0
        } else {
            raw_delta.clamp(0.0, self.max_delta)
        };
        self.elapsed += delta;
        self.last = FrameTime::new(delta, self.elapsed);
        self.last
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn last(&self) -> FrameTime {
        self.last
    }
}

/// Frame time tracker for the FPS readout.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    fn recorded(&self) -> &[Duration] {
        &self.history[..self.count()]
    }

    pub fn average(&self) -> Duration {
        let count = self.count();
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.recorded().iter().sum();
        total / count as u32
    }

    pub fn max(&self) -> Duration {
        self.recorded().iter().copied().max().unwrap_or(Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.recorded().iter().copied().min().unwrap_or(Duration::ZERO)
    }

    /// Frames per second over the window; zero until a non-zero frame is recorded.
    pub fn fps(&self) -> f32 {
        let avg = self.average().as_secs_f32();
        if avg > 0.0 { 1.0 / avg } else { 0.0 }
    }

    pub fn count(&self) -> usize {
        if self.filled {
            self.capacity
        } else {
            self.index
        }
    }
}
