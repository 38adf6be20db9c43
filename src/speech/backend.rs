//! Platform speech capability

use crate::Result;

/// Identifies one call to `SpeechBackend::utter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(pub u64);

/// Raw events emitted by a speech backend
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    /// Playback of an utterance ended (naturally or after cancellation)
    UtteranceEnded(UtteranceId),

    /// The recognizer produced a result
    Recognized {
        /// Recognized text, untrimmed
        transcript: String,
        /// Whether the recognizer marked the result as complete
        is_final: bool,
    },

    /// The recognizer failed
    RecognitionError(String),
}

/// Text-to-speech and speech-to-text primitives.
///
/// Implementations deliver `SpeechEvent`s asynchronously through whatever
/// channel they were constructed with; the calls themselves never block.
pub trait SpeechBackend {
    /// Start speaking `text`. Completion is reported as `UtteranceEnded(id)`.
    fn utter(&mut self, id: UtteranceId, text: &str) -> Result<()>;

    /// Cancel whatever is currently being spoken
    fn cancel_utterance(&mut self);

    /// Begin one recognition session
    fn start_recognition(&mut self) -> Result<()>;

    /// End the current recognition session
    fn stop_recognition(&mut self);
}
