//! Deterministic collaborators for driving the controller without audio,
//! clocks, or network.

use crate::dialogue::host::{Scheduled, SessionHost};
use crate::gateway::GenerationRequest;
use crate::speech::{SpeechBackend, UtteranceId};
use crate::{PrepError, Result};
use std::collections::VecDeque;
use std::time::Duration;

/// A call made on `RecordingBackend`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Utter(String),
    Cancel,
    StartRecognition,
    StopRecognition,
}

/// Speech backend that records every call and never emits events
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
    fail_recognition: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `start_recognition` fail, as when no microphone is available
    pub fn failing_recognition() -> Self {
        Self {
            calls: Vec::new(),
            fail_recognition: true,
        }
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.clone()
    }
}

impl SpeechBackend for RecordingBackend {
    fn utter(&mut self, _id: UtteranceId, text: &str) -> Result<()> {
        self.calls.push(BackendCall::Utter(text.to_string()));
        Ok(())
    }

    fn cancel_utterance(&mut self) {
        self.calls.push(BackendCall::Cancel);
    }

    fn start_recognition(&mut self) -> Result<()> {
        if self.fail_recognition {
            return Err(PrepError::Recognition("not-allowed".into()));
        }
        self.calls.push(BackendCall::StartRecognition);
        Ok(())
    }

    fn stop_recognition(&mut self) {
        self.calls.push(BackendCall::StopRecognition);
    }
}

/// Host whose scheduled tasks are released one at a time by the test
#[derive(Debug, Default)]
pub struct ManualHost {
    scheduled: VecDeque<(Duration, Scheduled)>,
    generation_requests: Vec<GenerationRequest>,
    navigations: Vec<String>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest scheduled task, regardless of its delay
    pub fn pop_scheduled(&mut self) -> Option<Scheduled> {
        self.scheduled.pop_front().map(|(_, task)| task)
    }

    pub fn pending(&self) -> &VecDeque<(Duration, Scheduled)> {
        &self.scheduled
    }

    pub fn generation_requests(&self) -> &[GenerationRequest] {
        &self.generation_requests
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}

impl SessionHost for ManualHost {
    fn schedule(&mut self, delay: Duration, task: Scheduled) {
        self.scheduled.push_back((delay, task));
    }

    fn request_generation(&mut self, request: GenerationRequest) {
        self.generation_requests.push(request);
    }

    fn navigate(&mut self, route: &str) {
        self.navigations.push(route.to_string());
    }
}
