//! Voice-driven setup dialogue
//!
//! The controller walks a fixed list of setup questions, speaking each one,
//! listening for the answer, re-asking when nothing is heard, and handing the
//! collected answers to the generation gateway once the list is exhausted.

pub mod answers;
pub mod config;
pub mod controller;
pub mod host;
pub mod script;
pub mod state;
#[cfg(test)]
pub(crate) mod testing;
pub mod timer;

pub use answers::SetupAnswers;
pub use config::DialogueConfig;
pub use controller::SetupController;
pub use host::{Scheduled, SessionHost};
pub use script::{SetupKey, SetupQuestion, SetupScript};
pub use state::{CallStatus, DialoguePhase};
pub use timer::{NoResponseTimer, TimerTicket};
