use crate::output::{AudioOutput, SoundId};

/// A looping sound switched on and off by a condition.
///
/// Only transitions reach the backend, so holding a condition does not
/// restart the loop every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopCue {
    sound: SoundId,
    active: bool,
}

impl LoopCue {
    pub fn new(sound: SoundId) -> Self {
        Self {
            sound,
            active: false,
        }
    }

    pub fn sound(&self) -> &SoundId {
        &self.sound
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start or stop the loop. A sound that is not loaded yet is skipped and
    /// retried on the next call.
    pub fn set_active<A: AudioOutput + ?Sized>(&mut self, audio: &mut A, active: bool) {
        if active == self.active || !audio.is_loaded(&self.sound) {
            return;
        }
        if active {
            audio.play(&self.sound);
        } else {
            audio.stop(&self.sound);
        }
        self.active = active;
        tracing::debug!(sound = %self.sound, active, "loop cue switched");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{AudioCommand, RecordingAudio};

    #[test]
    fn only_transitions_reach_backend() {
        let mut audio = RecordingAudio::new();
        audio.load("footsteps");
        let mut cue = LoopCue::new(SoundId::from("footsteps"));
        for _ in 0..3 {
            cue.set_active(&mut audio, true);
        }
        cue.set_active(&mut audio, false);
        cue.set_active(&mut audio, false);
        assert_eq!(
            audio.commands(),
            &[
                AudioCommand::Play(SoundId::from("footsteps")),
                AudioCommand::Stop(SoundId::from("footsteps")),
            ]
        );
    }

    #[test]
    fn unloaded_sound_retries_later() {
        let mut audio = RecordingAudio::new();
        let mut cue = LoopCue::new(SoundId::from("footsteps"));
        cue.set_active(&mut audio, true);
        assert!(!cue.is_active());
        audio.load("footsteps");
        cue.set_active(&mut audio, true);
        assert!(cue.is_active());
        assert!(audio.is_playing(cue.sound()));
    }
}
