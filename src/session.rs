//! Signed-in user as seen by the dialogue
//!
//! Session lifecycle (sign-in, cookies) belongs to the hosting application;
//! the dialogue only reads the user's id and display name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub user_name: String,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

/// Source of the current user
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<UserProfile>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Session with a fixed user, typically taken from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<UserProfile>,
}

impl StaticSession {
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.clone()
    }
}
