//! Session runtime for the setup dialogue
//!
//! A worker thread owns the controller. UI commands, speech events and
//! deferred tasks all arrive on channels and are applied one at a time, so
//! the controller never runs concurrently with itself. After every step a
//! snapshot is published for the UI.

use crate::dialogue::{CallStatus, DialoguePhase, Scheduled, SessionHost, SetupController};
use crate::gateway::{GatewayClient, GenerationOutcome, GenerationRequest};
use crate::integration::config::AppConfig;
use crate::messages::TranscriptEntry;
use crate::speech::{SpeechBackend, SpeechEvent, TextModeSpeech};
use crate::{PrepError, Result};
use crossbeam_channel::{bounded, select, unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::runtime::{Handle, Runtime};
use tracing::{debug, info, warn};

/// Commands that can be sent to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorCommand {
    /// Press the call button
    StartCall,

    /// End the call
    Disconnect,

    /// A typed answer, delivered as a final recognition result
    SubmitAnswer(String),

    /// Shutdown the orchestrator
    Shutdown,
}

/// Events emitted by the orchestrator
#[derive(Debug, Clone, PartialEq)]
pub enum OrchestratorEvent {
    /// Current dialogue state
    Snapshot(SessionSnapshot),

    /// The session is over; show the given route
    Navigate(String),

    /// A user-facing error message
    Error(String),

    /// Orchestrator has shut down
    Shutdown,
}

/// Everything the UI renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub phase: DialoguePhase,
    pub call_status: CallStatus,
    pub speaking: bool,
    pub listening: bool,
    pub question_index: usize,
    pub question_count: usize,
    pub transcript: Vec<TranscriptEntry>,
    /// Text currently being spoken
    pub caption: Option<String>,
}

impl SessionSnapshot {
    fn capture<B: SpeechBackend, H: SessionHost>(controller: &SetupController<B, H>) -> Self {
        let speaking = controller.is_speaking();
        Self {
            phase: controller.phase(),
            call_status: controller.call_status(),
            speaking,
            listening: controller.is_listening(),
            question_index: controller.question_index(),
            question_count: controller.script().len(),
            transcript: controller.transcript().get_all(),
            caption: if speaking {
                controller.speech().last_spoken().map(String::from)
            } else {
                None
            },
        }
    }
}

/// Events produced on the async runtime and fed back to the worker
#[derive(Debug)]
enum RuntimeEvent {
    Scheduled(Scheduled),
    GenerationFinished(GenerationOutcome),
}

/// `SessionHost` backed by the tokio runtime
struct RuntimeHost {
    runtime: Handle,
    internal_tx: Sender<RuntimeEvent>,
    event_tx: Sender<OrchestratorEvent>,
    gateway: GatewayClient,
}

impl SessionHost for RuntimeHost {
    fn schedule(&mut self, delay: Duration, task: Scheduled) {
        let tx = self.internal_tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(RuntimeEvent::Scheduled(task));
        });
    }

    fn request_generation(&mut self, request: GenerationRequest) {
        let tx = self.internal_tx.clone();
        let gateway = self.gateway.clone();
        self.runtime.spawn(async move {
            let outcome = gateway.generate(&request).await;
            let _ = tx.send(RuntimeEvent::GenerationFinished(outcome));
        });
    }

    fn navigate(&mut self, route: &str) {
        let _ = self
            .event_tx
            .send(OrchestratorEvent::Navigate(route.to_string()));
    }
}

/// Handle for controlling the orchestrator from the UI
#[derive(Clone)]
pub struct OrchestratorHandle {
    command_tx: Sender<OrchestratorCommand>,
    event_rx: Receiver<OrchestratorEvent>,
}

impl OrchestratorHandle {
    /// Send a command to the orchestrator
    pub fn send_command(&self, cmd: OrchestratorCommand) -> Result<()> {
        self.command_tx
            .send(cmd)
            .map_err(|e| PrepError::Channel(format!("Failed to send command: {}", e)))
    }

    /// Try to receive an event from the orchestrator
    pub fn try_recv_event(&self) -> Option<OrchestratorEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event
    pub fn recv_event_timeout(&self, timeout: Duration) -> Option<OrchestratorEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Get the command sender
    pub fn command_sender(&self) -> Sender<OrchestratorCommand> {
        self.command_tx.clone()
    }

    /// Get the event receiver
    pub fn event_receiver(&self) -> Receiver<OrchestratorEvent> {
        self.event_rx.clone()
    }
}

/// Main orchestrator that drives one setup session
pub struct Orchestrator {
    config: AppConfig,
    command_rx: Receiver<OrchestratorCommand>,
    event_tx: Sender<OrchestratorEvent>,
}

impl Orchestrator {
    /// Create a new orchestrator with the given configuration
    pub fn new(config: AppConfig) -> Result<(Self, OrchestratorHandle)> {
        config.validate().map_err(PrepError::Config)?;

        let (command_tx, command_rx) = bounded(100);
        let (event_tx, event_rx) = bounded(100);

        let handle = OrchestratorHandle {
            command_tx,
            event_rx,
        };
        let orchestrator = Self {
            config,
            command_rx,
            event_tx,
        };
        Ok((orchestrator, handle))
    }

    /// Start the worker thread.
    ///
    /// This consumes the orchestrator; the runtime and the controller live
    /// on the worker until `Shutdown` or until every handle is dropped.
    pub fn start(self) -> Result<JoinHandle<()>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| PrepError::Config(format!("Failed to create runtime: {}", e)))?;
        let gateway = GatewayClient::new(self.config.gateway.clone())?;

        let handle = thread::Builder::new()
            .name("prep-session".into())
            .spawn(move || self.run(runtime, gateway))
            .map_err(|e| PrepError::IO(format!("Failed to spawn session thread: {}", e)))?;
        Ok(handle)
    }

    fn run(self, runtime: Runtime, gateway: GatewayClient) {
        info!("Session runtime started for user {}", self.config.user.user_id);

        let (speech_tx, speech_rx) = bounded::<SpeechEvent>(100);
        let (internal_tx, internal_rx) = unbounded::<RuntimeEvent>();

        let backend = TextModeSpeech::new(
            self.config.text_mode.clone(),
            speech_tx,
            runtime.handle().clone(),
        );
        let host = RuntimeHost {
            runtime: runtime.handle().clone(),
            internal_tx,
            event_tx: self.event_tx.clone(),
            gateway,
        };
        let mut controller = SetupController::new(
            self.config.dialogue.clone(),
            self.config.user.clone(),
            backend,
            host,
        );
        self.publish(&controller);

        loop {
            select! {
                recv(self.command_rx) -> cmd => match cmd {
                    Ok(OrchestratorCommand::StartCall) => controller.start_call(),
                    Ok(OrchestratorCommand::Disconnect) => controller.disconnect(),
                    Ok(OrchestratorCommand::SubmitAnswer(text)) => {
                        debug!("Typed answer: {}", text);
                        controller.on_speech_event(SpeechEvent::Recognized {
                            transcript: text,
                            is_final: true,
                        });
                    }
                    Ok(OrchestratorCommand::Shutdown) => {
                        info!("Orchestrator shutdown requested");
                        break;
                    }
                    Err(_) => {
                        warn!("Command channel disconnected");
                        break;
                    }
                },
                recv(speech_rx) -> event => {
                    if let Ok(event) = event {
                        controller.on_speech_event(event);
                    }
                },
                recv(internal_rx) -> event => match event {
                    Ok(RuntimeEvent::Scheduled(task)) => controller.on_scheduled(task),
                    Ok(RuntimeEvent::GenerationFinished(outcome)) => {
                        if let Err(e) = &outcome {
                            let _ = self
                                .event_tx
                                .try_send(OrchestratorEvent::Error(e.user_message()));
                        }
                        controller.on_generation_finished(outcome);
                    }
                    Err(_) => {}
                },
            }
            self.publish(&controller);
        }

        controller.disconnect();
        let _ = self.event_tx.send(OrchestratorEvent::Shutdown);
        runtime.shutdown_timeout(Duration::from_millis(100));
        info!("Session runtime stopped");
    }

    fn publish<B: SpeechBackend, H: SessionHost>(&self, controller: &SetupController<B, H>) {
        // Snapshots supersede each other, so a full queue only drops stale ones
        let snapshot = SessionSnapshot::capture(controller);
        let _ = self.event_tx.try_send(OrchestratorEvent::Snapshot(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_creation() {
        let result = Orchestrator::new(AppConfig::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AppConfig::default().with_gateway_endpoint("not a url");
        assert!(matches!(
            Orchestrator::new(config),
            Err(PrepError::Config(_))
        ));
    }

    #[test]
    fn test_initial_snapshot_and_shutdown() {
        let (orchestrator, handle) = Orchestrator::new(AppConfig::default()).unwrap();
        let worker = orchestrator.start().unwrap();

        match handle.recv_event_timeout(Duration::from_secs(2)) {
            Some(OrchestratorEvent::Snapshot(snapshot)) => {
                assert_eq!(snapshot.call_status, CallStatus::Inactive);
                assert_eq!(snapshot.question_count, 6);
                assert!(snapshot.transcript.is_empty());
            }
            other => panic!("expected snapshot, got {:?}", other),
        }

        handle.send_command(OrchestratorCommand::Shutdown).unwrap();
        worker.join().unwrap();
    }
}
