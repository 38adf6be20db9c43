//! UI components for the call screen

mod call_button;
mod call_view;
mod generating_overlay;
mod input_bar;
mod transcript_panel;

pub use call_button::{call_label, CallButton};
pub use call_view::CallView;
pub use generating_overlay::{GeneratingOverlay, GENERATING_SUBTITLE, GENERATING_TITLE};
pub use input_bar::InputBar;
pub use transcript_panel::TranscriptPanel;
