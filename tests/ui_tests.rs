//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests render the real call screen against a detached session:
//! commands land on a channel the test reads, and snapshots are injected
//! directly into the state.

use crossbeam_channel::{unbounded, Receiver};
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use interview_prep::dialogue::{CallStatus, DialoguePhase};
use interview_prep::integration::{OrchestratorCommand, OrchestratorEvent, SessionSnapshot};
use interview_prep::messages::{Speaker, TranscriptEntry};
use interview_prep::session::UserProfile;
use interview_prep::ui::{show_app, AppState, Screen, Theme, GENERATING_TITLE};

/// Application state wrapper for testing
struct TestApp {
    state: AppState,
    theme: Theme,
    commands: Receiver<OrchestratorCommand>,
}

impl TestApp {
    fn new() -> Self {
        let (command_tx, commands) = unbounded();
        let mut state = AppState::new(UserProfile::new("u1", "Ada"));
        state.command_tx = Some(command_tx);
        Self {
            state,
            theme: Theme::dark(),
            commands,
        }
    }

    fn with_snapshot(mut self, snapshot: SessionSnapshot) -> Self {
        self.state.apply_event(OrchestratorEvent::Snapshot(snapshot));
        self
    }

    fn sent(&self) -> Vec<OrchestratorCommand> {
        self.commands.try_iter().collect()
    }
}

fn harness(app: TestApp) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 640.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                show_app(ctx, &mut app.state, &app.theme);
            },
            app,
        )
}

fn active_listening() -> SessionSnapshot {
    SessionSnapshot {
        phase: DialoguePhase::Setup,
        call_status: CallStatus::Active,
        listening: true,
        question_count: 6,
        ..Default::default()
    }
}

/// The call button starts out labelled "Call"
#[test]
fn test_call_button_exists() {
    let mut harness = harness(TestApp::new());
    harness.run();

    let _button = harness.get_by_label("Call");
    assert!(harness.query_by_label("End").is_none());
}

/// Pressing Call starts the call once and shows the connecting label
#[test]
fn test_call_button_starts_call() {
    let mut harness = harness(TestApp::new());
    harness.run();

    harness.get_by_label("Call").click();
    harness.step();
    harness.step();

    assert_eq!(harness.state().sent(), vec![OrchestratorCommand::StartCall]);
    assert_eq!(
        harness.state().state.snapshot.call_status,
        CallStatus::Connecting
    );
    let _connecting = harness.get_by_label(". . .");
}

/// An active call shows End, which disconnects
#[test]
fn test_end_button_disconnects() {
    let app = TestApp::new().with_snapshot(active_listening());
    let mut harness = harness(app);
    harness.run();

    harness.get_by_label("End").click();
    harness.run();

    assert_eq!(harness.state().sent(), vec![OrchestratorCommand::Disconnect]);
}

/// The user card shows the signed-in user's name
#[test]
fn test_user_card_shows_name() {
    let mut harness = harness(TestApp::new());
    harness.run();

    let _name = harness.get_by_label("Ada");
    let _interviewer = harness.get_by_label("AI Interviewer");
}

/// Only the last four transcript entries are shown, with speaker prefixes
#[test]
fn test_transcript_shows_last_four() {
    let transcript = vec![
        TranscriptEntry::new(Speaker::Ai, "Hello Ada!"),
        TranscriptEntry::new(Speaker::User, "yes"),
        TranscriptEntry::new(Speaker::Ai, "Technical or behavioral?"),
        TranscriptEntry::new(Speaker::User, "technical"),
        TranscriptEntry::new(Speaker::Ai, "What role?"),
        TranscriptEntry::new(Speaker::User, "backend engineer"),
    ];
    let app = TestApp::new().with_snapshot(SessionSnapshot {
        transcript,
        ..active_listening()
    });
    let mut harness = harness(app);
    harness.run();

    let _latest = harness.get_by_label("You: backend engineer");
    let _ai = harness.get_by_label("AI: Technical or behavioral?");
    assert!(harness.query_by_label("AI: Hello Ada!").is_none());
    assert!(harness.query_by_label("You: yes").is_none());
}

/// Typing an answer and pressing send delivers it to the session
#[test]
fn test_typed_answer_is_submitted() {
    let app = TestApp::new().with_snapshot(active_listening());
    let mut harness = harness(app);
    harness.run();

    harness.get_by_label("Answer input").focus();
    harness.run();
    harness.get_by_label("Answer input").type_text("backend engineer");
    harness.run();
    assert_eq!(harness.state().state.input_text, "backend engineer");

    harness.get_by_label("Send answer").click();
    harness.run();

    assert_eq!(
        harness.state().sent(),
        vec![OrchestratorCommand::SubmitAnswer("backend engineer".into())]
    );
    assert!(harness.state().state.input_text.is_empty());
}

/// Answers typed while the interviewer is speaking are not sent
#[test]
fn test_answer_ignored_while_not_listening() {
    let app = TestApp::new().with_snapshot(SessionSnapshot {
        listening: false,
        ..active_listening()
    });
    let mut harness = harness(app);
    harness.run();

    harness.state_mut().state.input_text = "too early".into();
    harness.run();
    harness.get_by_label("Send answer").click();
    harness.run();

    assert!(harness.state().sent().is_empty());
}

/// The speaking indicator follows the snapshot
#[test]
fn test_speaking_indicator() {
    let app = TestApp::new().with_snapshot(SessionSnapshot {
        speaking: true,
        listening: false,
        caption: Some("What role are you applying for?".into()),
        ..active_listening()
    });
    let mut harness = harness(app);
    harness.step();

    let _indicator = harness.get_by_label("Interviewer speaking");
    let _caption = harness.get_by_label("What role are you applying for?");
    assert!(harness.query_by_label("Listening for answer").is_none());
}

/// The generating overlay appears while questions are generated
#[test]
fn test_generating_overlay() {
    let app = TestApp::new().with_snapshot(SessionSnapshot {
        phase: DialoguePhase::Generating,
        listening: false,
        ..active_listening()
    });
    let mut harness = harness(app);
    harness.step();

    let _overlay = harness.get_by_label(GENERATING_TITLE);
}

/// Navigation switches to the landing view
#[test]
fn test_navigation_shows_landing() {
    let mut app = TestApp::new();
    app.state.apply_event(OrchestratorEvent::Navigate("/".into()));
    let mut harness = harness(app);
    harness.run();

    let _home = harness.get_by_label("Home");
    assert!(harness.query_by_label("Call").is_none());

    harness.get_by_label("Back to call").click();
    harness.run();
    assert_eq!(harness.state().state.screen, Screen::Call);
}
