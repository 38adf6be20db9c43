//! Speech adapter enforcing the speak/listen protocol
//!
//! At most one utterance is audible at a time, and the recognizer never
//! runs while something is being spoken.

use crate::speech::backend::{SpeechBackend, SpeechEvent, UtteranceId};
use crate::Result;
use tracing::{debug, warn};

/// Events the adapter forwards to the dialogue controller
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEvent {
    /// The current utterance finished playing
    SpeechEnded,

    /// A final, non-empty recognized utterance
    FinalUtterance(String),

    /// Recognition failed; listening has been stopped
    RecognitionFailed(String),
}

/// Wraps a `SpeechBackend` and tracks the speaking/listening flags
pub struct SpeechAdapter<B: SpeechBackend> {
    backend: B,
    speaking: bool,
    listening: bool,
    next_id: u64,
    current: Option<UtteranceId>,
    current_text: Option<String>,
}

impl<B: SpeechBackend> SpeechAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            speaking: false,
            listening: false,
            next_id: 0,
            current: None,
            current_text: None,
        }
    }

    /// Speak `text`, cancelling any utterance in progress and stopping the
    /// recognizer first.
    pub fn speak(&mut self, text: &str) -> Result<UtteranceId> {
        if self.speaking {
            debug!("Cancelling utterance {:?} before speaking", self.current);
            self.backend.cancel_utterance();
            self.speaking = false;
        }
        self.stop_listening();

        self.next_id += 1;
        let id = UtteranceId(self.next_id);
        self.current = Some(id);
        self.current_text = Some(text.to_string());
        self.speaking = true;

        if let Err(e) = self.backend.utter(id, text) {
            self.speaking = false;
            self.current = None;
            return Err(e);
        }

        debug!("Speaking utterance {:?}", id);
        Ok(id)
    }

    /// Cancel the current utterance, if any
    pub fn cancel_speech(&mut self) {
        if self.speaking {
            self.backend.cancel_utterance();
            self.speaking = false;
            self.current = None;
        }
    }

    /// Start the recognizer.
    ///
    /// Returns `Ok(false)` without touching the backend while speaking or
    /// when already listening.
    pub fn start_listening(&mut self) -> Result<bool> {
        if self.speaking || self.listening {
            debug!(
                "Not starting recognition (speaking: {}, listening: {})",
                self.speaking, self.listening
            );
            return Ok(false);
        }
        self.backend.start_recognition()?;
        self.listening = true;
        debug!("Recognition started");
        Ok(true)
    }

    /// Stop the recognizer if it is running
    pub fn stop_listening(&mut self) {
        if !self.listening {
            return;
        }
        self.backend.stop_recognition();
        self.listening = false;
        debug!("Recognition stopped");
    }

    /// Translate a raw backend event, updating the flags.
    ///
    /// Interim results, empty transcripts, results arriving after the
    /// recognizer was stopped, and end events for cancelled utterances are
    /// dropped.
    pub fn filter(&mut self, event: SpeechEvent) -> Option<AdapterEvent> {
        match event {
            SpeechEvent::UtteranceEnded(id) => {
                if self.current != Some(id) || !self.speaking {
                    debug!("Ignoring end of stale utterance {:?}", id);
                    return None;
                }
                self.speaking = false;
                self.current = None;
                Some(AdapterEvent::SpeechEnded)
            }
            SpeechEvent::Recognized {
                transcript,
                is_final,
            } => {
                if !is_final {
                    return None;
                }
                let text = transcript.trim();
                if text.is_empty() {
                    return None;
                }
                if !self.listening {
                    debug!("Dropping result received while not listening: {}", text);
                    return None;
                }
                Some(AdapterEvent::FinalUtterance(text.to_string()))
            }
            SpeechEvent::RecognitionError(error) => {
                warn!("Speech recognition error: {}", error);
                self.stop_listening();
                Some(AdapterEvent::RecognitionFailed(error))
            }
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The utterance currently being spoken
    pub fn current_utterance(&self) -> Option<UtteranceId> {
        if self.speaking {
            self.current
        } else {
            None
        }
    }

    /// Text of the most recent utterance
    pub fn last_spoken(&self) -> Option<&str> {
        self.current_text.as_deref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
