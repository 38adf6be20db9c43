//! Application state management
//!
//! This module provides the central state for the call screen. The session
//! runtime is authoritative; the UI keeps the latest snapshot it published.

use crate::dialogue::{CallStatus, DialoguePhase};
use crate::integration::{OrchestratorCommand, OrchestratorEvent, OrchestratorHandle, SessionSnapshot};
use crate::messages::TranscriptEntry;
use crate::session::UserProfile;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

/// Number of transcript entries shown under the cards
pub const VISIBLE_TRANSCRIPT_ENTRIES: usize = 4;

/// Which view is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The interviewer/user cards with the call controls
    Call,
    /// Where the session navigates once it is over
    Landing { route: String },
}

/// Central application state
pub struct AppState {
    /// The signed-in user
    pub user: UserProfile,

    /// Latest dialogue state from the session runtime
    pub snapshot: SessionSnapshot,

    /// Current typed answer
    pub input_text: String,

    /// Current view
    pub screen: Screen,

    /// Last error message
    pub last_error: Option<String>,

    /// Channel to send session commands
    pub command_tx: Option<Sender<OrchestratorCommand>>,

    /// Channel to receive session events
    pub event_rx: Option<Receiver<OrchestratorEvent>>,
}

impl AppState {
    /// Create a new application state
    pub fn new(user: UserProfile) -> Self {
        Self {
            user,
            snapshot: SessionSnapshot::default(),
            input_text: String::new(),
            screen: Screen::Call,
            last_error: None,
            command_tx: None,
            event_rx: None,
        }
    }

    /// Connect to a running session
    pub fn attach(&mut self, handle: &OrchestratorHandle) {
        self.command_tx = Some(handle.command_sender());
        self.event_rx = Some(handle.event_receiver());
    }

    fn send(&mut self, cmd: OrchestratorCommand) {
        match &self.command_tx {
            Some(tx) => {
                if let Err(e) = tx.send(cmd) {
                    warn!("Failed to send command: {}", e);
                    self.last_error = Some("Lost connection to the session.".to_string());
                }
            }
            None => debug!("No session attached, dropping {:?}", cmd),
        }
    }

    /// Press the call button
    pub fn start_call(&mut self) {
        if !self.snapshot.call_status.can_start() {
            return;
        }
        // Shown as ". . ." until the runtime confirms
        self.snapshot.call_status = CallStatus::Connecting;
        self.last_error = None;
        self.send(OrchestratorCommand::StartCall);
    }

    /// Press the end button
    pub fn disconnect(&mut self) {
        self.send(OrchestratorCommand::Disconnect);
    }

    /// Whether a typed answer would be accepted right now
    pub fn can_answer(&self) -> bool {
        self.snapshot.listening && self.snapshot.phase == DialoguePhase::Setup
    }

    /// Deliver the typed answer
    pub fn submit_answer(&mut self) {
        let text = self.input_text.trim().to_string();
        if text.is_empty() || !self.can_answer() {
            return;
        }
        self.send(OrchestratorCommand::SubmitAnswer(text));
        self.input_text.clear();
    }

    /// Transcript lines shown under the cards
    pub fn recent_transcript(&self) -> &[TranscriptEntry] {
        let entries = &self.snapshot.transcript;
        let start = entries.len().saturating_sub(VISIBLE_TRANSCRIPT_ENTRIES);
        &entries[start..]
    }

    pub fn is_generating(&self) -> bool {
        self.snapshot.phase == DialoguePhase::Generating
    }

    /// Apply one event from the session runtime
    pub fn apply_event(&mut self, event: OrchestratorEvent) {
        match event {
            OrchestratorEvent::Snapshot(snapshot) => self.snapshot = snapshot,
            OrchestratorEvent::Navigate(route) => {
                debug!("Navigating to {}", route);
                self.screen = Screen::Landing { route };
            }
            OrchestratorEvent::Error(error) => self.last_error = Some(error),
            OrchestratorEvent::Shutdown => debug!("Session runtime shut down"),
        }
    }

    /// Process incoming events from the session runtime
    pub fn poll_events(&mut self) {
        let events: Vec<OrchestratorEvent> = match &self.event_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for event in events {
            self.apply_event(event);
        }
    }

    /// Leave the landing view for a fresh call screen
    pub fn return_to_call(&mut self) {
        self.screen = Screen::Call;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Speaker;
    use crossbeam_channel::unbounded;

    fn state_with_channels() -> (
        AppState,
        Receiver<OrchestratorCommand>,
        Sender<OrchestratorEvent>,
    ) {
        let (command_tx, command_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let mut state = AppState::new(UserProfile::new("u1", "Ada"));
        state.command_tx = Some(command_tx);
        state.event_rx = Some(event_rx);
        (state, command_rx, event_tx)
    }

    #[test]
    fn test_start_call_once() {
        let (mut state, commands, _events) = state_with_channels();
        state.start_call();
        state.start_call();

        assert_eq!(state.snapshot.call_status, CallStatus::Connecting);
        assert_eq!(commands.try_iter().count(), 1);
    }

    #[test]
    fn test_finished_call_is_not_restarted() {
        let (mut state, commands, _events) = state_with_channels();
        state.snapshot.call_status = CallStatus::Finished;
        state.start_call();

        assert_eq!(state.snapshot.call_status, CallStatus::Finished);
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn test_answer_only_while_listening() {
        let (mut state, commands, _events) = state_with_channels();
        state.input_text = "backend".into();
        state.submit_answer();
        assert!(commands.try_recv().is_err());

        state.snapshot.listening = true;
        state.submit_answer();
        assert_eq!(
            commands.try_recv().unwrap(),
            OrchestratorCommand::SubmitAnswer("backend".into())
        );
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_poll_applies_snapshot_and_navigation() {
        let (mut state, _commands, events) = state_with_channels();
        let snapshot = SessionSnapshot {
            phase: DialoguePhase::Generating,
            ..Default::default()
        };
        events.send(OrchestratorEvent::Snapshot(snapshot)).unwrap();
        events.send(OrchestratorEvent::Navigate("/".into())).unwrap();

        state.poll_events();
        assert!(state.is_generating());
        assert_eq!(state.screen, Screen::Landing { route: "/".into() });
    }

    #[test]
    fn test_recent_transcript_keeps_last_four() {
        let mut state = AppState::new(UserProfile::new("u1", "Ada"));
        state.snapshot.transcript = (0..6)
            .map(|i| TranscriptEntry::new(Speaker::Ai, format!("line {}", i)))
            .collect();

        let recent = state.recent_transcript();
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].text, "line 2");
    }
}
