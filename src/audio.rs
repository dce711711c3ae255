//! Sound cues
//!
//! The simulation signals audible moments through the `AudioSink` seam and
//! never waits on playback. Actual backends live with the embedder.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball bounces off a brick, the paddle or a wall
    Bump,
    /// Last brick destroyed
    Victory,
    /// Ball out the bottom
    GameOver,
}

/// Output seam for sound cues. Implementations must not block.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that drops every cue (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Sink that records cues in emission order (tests, diagnostics)
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub cues: Vec<SoundCue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}
