//! Authenticated session handed to the HTTP layer.
//!
//! Front-ends own sign-in; they push the result in here and pass the
//! session to [`ApiClient`](crate::infra::api_client::ApiClient). The
//! client reads the bearer token per request and signs the session out
//! when the backend answers 401.

use reelist_model::UserId;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub display_name: String,
}

/// Session state machine
#[derive(Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    SignedIn {
        user: SessionUser,
        access_token: String,
    },
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::SignedOut => write!(f, "SignedOut"),
            SessionState::SignedIn { user, .. } => f
                .debug_struct("SignedIn")
                .field("user", user)
                .field("access_token", &"<redacted>")
                .finish(),
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::SignedIn { .. })
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::SignedIn { user, .. } => Some(user),
            SessionState::SignedOut => None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            SessionState::SignedIn { access_token, .. } => Some(access_token),
            SessionState::SignedOut => None,
        }
    }
}

/// Thread-safe session store backed by a watch channel
#[derive(Clone, Debug)]
pub struct AuthSession {
    sender: Arc<watch::Sender<SessionState>>,
    receiver: watch::Receiver<SessionState>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    /// Create a signed-out session
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(SessionState::SignedOut);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Create a session that is already signed in
    pub fn signed_in(user: SessionUser, access_token: impl Into<String>) -> Self {
        let session = Self::new();
        session.sign_in(user, access_token);
        session
    }

    pub fn current(&self) -> SessionState {
        self.receiver.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.receiver.borrow().is_authenticated()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.receiver.borrow().user().cloned()
    }

    pub fn access_token(&self) -> Option<String> {
        self.receiver.borrow().access_token().map(str::to_owned)
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.receiver.clone()
    }

    pub fn set(&self, state: SessionState) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(state);
    }

    pub fn sign_in(&self, user: SessionUser, access_token: impl Into<String>) {
        self.set(SessionState::SignedIn {
            user,
            access_token: access_token.into(),
        });
    }

    pub fn sign_out(&self) {
        self.set(SessionState::SignedOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> SessionUser {
        SessionUser {
            id: UserId(Uuid::now_v7()),
            display_name: "ana".into(),
        }
    }

    #[test]
    fn sign_in_and_out_transitions() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated());

        session.sign_in(user(), "token-1");
        assert!(session.is_authenticated());
        assert_eq!(session.access_token().as_deref(), Some("token-1"));

        session.sign_out();
        assert_eq!(session.current(), SessionState::SignedOut);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn clones_share_state() {
        let session = AuthSession::new();
        let other = session.clone();
        session.sign_in(user(), "shared");
        assert_eq!(other.access_token().as_deref(), Some("shared"));
    }

    #[test]
    fn debug_output_hides_token() {
        let state = SessionState::SignedIn {
            user: user(),
            access_token: "secret".into(),
        };
        assert!(!format!("{state:?}").contains("secret"));
    }
}
