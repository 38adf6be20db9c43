//! Text-mode speech backend
//!
//! Utterances are displayed instead of played: each one "lasts" for a
//! duration proportional to its word count, after which `UtteranceEnded`
//! is delivered. Answers are typed by the user and injected by the session
//! runtime as final recognition results.

use crate::speech::backend::{SpeechBackend, SpeechEvent, UtteranceId};
use crate::{PrepError, Result};
use crossbeam_channel::Sender;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Configuration for the text-mode backend
#[derive(Clone, Debug)]
pub struct TextModeConfig {
    /// Simulated speaking rate
    pub words_per_minute: u32,

    /// Shortest time any utterance is shown
    pub min_duration: Duration,
}

impl Default for TextModeConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 170,
            min_duration: Duration::from_millis(800),
        }
    }
}

impl TextModeConfig {
    /// Time needed to "speak" `text`
    pub fn duration_for(&self, text: &str) -> Duration {
        let words = text.split_whitespace().count() as u64;
        let wpm = u64::from(self.words_per_minute.max(1));
        Duration::from_millis(words * 60_000 / wpm).max(self.min_duration)
    }
}

pub struct TextModeSpeech {
    config: TextModeConfig,
    events: Sender<SpeechEvent>,
    runtime: Handle,
    playback: Option<JoinHandle<()>>,
}

impl TextModeSpeech {
    pub fn new(config: TextModeConfig, events: Sender<SpeechEvent>, runtime: Handle) -> Self {
        Self {
            config,
            events,
            runtime,
            playback: None,
        }
    }
}

impl SpeechBackend for TextModeSpeech {
    fn utter(&mut self, id: UtteranceId, text: &str) -> Result<()> {
        if self.events.is_full() {
            return Err(PrepError::Channel("speech event channel is full".into()));
        }
        let delay = self.config.duration_for(text);
        let events = self.events.clone();
        debug!("Showing utterance {:?} for {:?}", id, delay);
        self.playback = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Never block a runtime worker on the session channel
            if events.try_send(SpeechEvent::UtteranceEnded(id)).is_err() {
                warn!("Speech event channel unavailable, dropping end of {:?}", id);
            }
        }));
        Ok(())
    }

    fn cancel_utterance(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.abort();
        }
    }

    // Typed answers arrive through the session runtime; there is no
    // recognizer to drive.
    fn start_recognition(&mut self) -> Result<()> {
        debug!("Waiting for a typed answer");
        Ok(())
    }

    fn stop_recognition(&mut self) {}
}
