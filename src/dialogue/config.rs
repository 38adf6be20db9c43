//! Timing configuration for the setup dialogue

use std::time::Duration;

/// Delays and windows driving the dialogue
#[derive(Clone, Debug)]
pub struct DialogueConfig {
    /// How long to wait for an answer after listening starts
    pub no_response_window: Duration,

    /// Pause before the next question, the generation request, or a re-ask
    pub follow_up_delay: Duration,

    /// Simulated connection time after the call button is pressed
    pub connect_delay: Duration,

    /// Pause between a successful generation and its announcement
    pub success_announcement_delay: Duration,

    /// Time allowed for a final announcement to finish before finishing
    pub announcement_grace: Duration,

    /// Delay between reaching FINISHED and navigating away
    pub navigation_delay: Duration,

    /// Route navigated to when the session ends
    pub landing_route: String,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            no_response_window: Duration::from_secs(10),
            follow_up_delay: Duration::from_millis(500),
            connect_delay: Duration::from_secs(1),
            success_announcement_delay: Duration::from_secs(2),
            announcement_grace: Duration::from_secs(3),
            navigation_delay: Duration::from_secs(1),
            landing_route: "/".to_string(),
        }
    }
}

impl DialogueConfig {
    /// Set the no-response window
    pub fn with_no_response_window(mut self, window: Duration) -> Self {
        self.no_response_window = window;
        self
    }

    /// Set the landing route
    pub fn with_landing_route(mut self, route: impl Into<String>) -> Self {
        self.landing_route = route.into();
        self
    }

    /// Collapse every delay to zero, keeping the no-response window
    pub fn immediate(mut self) -> Self {
        self.follow_up_delay = Duration::ZERO;
        self.connect_delay = Duration::ZERO;
        self.success_announcement_delay = Duration::ZERO;
        self.announcement_grace = Duration::ZERO;
        self.navigation_delay = Duration::ZERO;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.no_response_window.is_zero() {
            return Err("No-response window must be greater than zero".to_string());
        }
        if !self.landing_route.starts_with('/') {
            return Err(format!(
                "Landing route must be absolute: {}",
                self.landing_route
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DialogueConfig::default();
        assert_eq!(config.no_response_window, Duration::from_secs(10));
        assert_eq!(config.follow_up_delay, Duration::from_millis(500));
        assert_eq!(config.landing_route, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_route_rejected() {
        let config = DialogueConfig::default().with_landing_route("home");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_immediate_keeps_window() {
        let config = DialogueConfig::default().immediate();
        assert!(config.follow_up_delay.is_zero());
        assert_eq!(config.no_response_window, Duration::from_secs(10));
    }
}
