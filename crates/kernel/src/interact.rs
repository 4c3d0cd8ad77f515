use driftwalk_common::{EntityId, Ray};

/// Timing handed to every per-frame update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub delta: f32,
    /// Seconds since the clock started.
    pub elapsed: f32,
}

impl FrameTime {
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }
}

/// Outcome of an activation, collected by the world and turned into events.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Collected { id: EntityId, name: String },
    InspectRequested { id: EntityId },
}

/// Sink for activation outcomes during one click dispatch.
#[derive(Debug, Default)]
pub struct ActivationContext {
    outcomes: Vec<Activation>,
}

impl ActivationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Activation) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[Activation] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Activation> {
        self.outcomes
    }
}

/// The capability every scene actor exposes to the frame loop.
pub trait Interactable {
    /// Advance time-driven state (animation, smoothing).
    fn update(&mut self, time: &FrameTime);

    /// Re-evaluate hover against `ray` and return the new hover flag.
    fn test_hover(&mut self, ray: &Ray) -> bool;

    /// React to an activation click. Most actors ignore it.
    fn on_activate(&mut self, _ctx: &mut ActivationContext) {}

    fn is_hovered(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        updates: u32,
    }

    impl Interactable for Counter {
        fn update(&mut self, _time: &FrameTime) {
            self.updates += 1;
        }

        fn test_hover(&mut self, _ray: &Ray) -> bool {
            false
        }
    }

    #[test]
    fn default_activation_is_noop() {
        let mut c = Counter { updates: 0 };
        let mut ctx = ActivationContext::new();
        c.on_activate(&mut ctx);
        c.update(&FrameTime::new(0.016, 0.016));
        assert!(ctx.outcomes().is_empty());
        assert!(!c.is_hovered());
        assert_eq!(c.updates, 1);
    }
}
