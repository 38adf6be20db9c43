//! Side effects the controller delegates to its environment

use crate::dialogue::timer::TimerTicket;
use crate::gateway::GenerationRequest;
use std::time::Duration;

/// Work the controller asks its host to hand back after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduled {
    /// The call finished connecting
    Connected,

    /// Speak the setup question at this index
    SpeakQuestion(usize),

    /// Re-ask the setup question at this index
    ReAsk(usize),

    /// Send the collected answers to the generation endpoint
    SubmitGeneration,

    /// Announce that generation succeeded
    AnnounceSuccess,

    /// Transition to FINISHED
    Finish,

    /// Leave the call view
    Navigate,

    /// The no-response window elapsed
    NoResponse(TimerTicket),
}

/// Environment of a `SetupController`.
///
/// Every method returns immediately; results come back to the controller
/// as `on_scheduled` and `on_generation_finished` calls on the same event
/// loop.
pub trait SessionHost {
    /// Deliver `task` back to the controller after `delay`
    fn schedule(&mut self, delay: Duration, task: Scheduled);

    /// Start the generation request; its outcome is delivered later
    fn request_generation(&mut self, request: GenerationRequest);

    /// Redirect the user to `route`
    fn navigate(&mut self, route: &str);
}
