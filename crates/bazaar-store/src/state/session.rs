//! # Session State
//!
//! Container for the current user session: the signed-in flag and the
//! profile fields the profile and wallet pages render.
//!
//! There is no real authentication behind this (non-goal); login just
//! records the profile the mock form submitted.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Profile fields shown on the profile page and prefilled at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// The current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether a user is signed in.
    pub is_authenticated: bool,

    /// Profile of the signed-in user, when any.
    pub profile: Option<UserProfile>,
}

/// Shared session state container.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a new signed-out session state.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Signs a user in with the given profile.
    pub fn login(&self, profile: UserProfile) {
        info!(email = %profile.email, "login");
        let mut session = self.session.lock().expect("Session mutex poisoned");
        session.is_authenticated = true;
        session.profile = Some(profile);
    }

    /// Signs the current user out and drops the profile.
    pub fn logout(&self) {
        info!("logout");
        let mut session = self.session.lock().expect("Session mutex poisoned");
        session.is_authenticated = false;
        session.profile = None;
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.with_session(|s| s.is_authenticated)
    }
}
