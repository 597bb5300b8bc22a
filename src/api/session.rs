//! Explicit session context for the admin backend
//!
//! Holds the bearer token and the logged-in user. It is passed to
//! [`super::ApiClient`] rather than living in global state, and can be
//! persisted to `~/.config/sqldraft/session.json` between runs.

use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use super::models::{LoginResponse, Role};

/// Route a client is sent to when its session ends
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Persisted part of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Default)]
struct SessionInner {
    state: SessionState,
    pending_redirect: Option<String>,
}

/// Cloneable handle to one session; clones observe the same state
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionInner>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: SessionState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                state,
                pending_redirect: None,
            })),
        }
    }

    // A panicked writer cannot leave the state half-updated, so poison is ignored
    fn read(&self) -> RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn token(&self) -> Option<String> {
        self.read().state.token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().state.token.is_some()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.read().state.user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.read().state.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn snapshot(&self) -> SessionState {
        self.read().state.clone()
    }

    /// Record a successful login
    pub fn set_login(&self, login: &LoginResponse) {
        let mut inner = self.write();
        inner.state = SessionState {
            token: Some(login.token.clone()),
            user: Some(SessionUser {
                user_id: login.user_id,
                username: login.username.clone(),
                role: login.role,
            }),
        };
        inner.pending_redirect = None;
        tracing::info!(username = %login.username, "Session started");
    }

    /// Forget token and user
    pub fn clear(&self) {
        self.write().state = SessionState::default();
        tracing::debug!("Session cleared");
    }

    /// Clear the session and ask the host to navigate to the login route
    pub fn expire(&self) {
        let mut inner = self.write();
        inner.state = SessionState::default();
        inner.pending_redirect = Some(LOGIN_ROUTE.to_string());
        tracing::warn!("Session expired, redirecting to {}", LOGIN_ROUTE);
    }

    /// The navigation the host still has to perform, if any
    pub fn take_redirect(&self) -> Option<String> {
        self.write().pending_redirect.take()
    }

    /// Load a persisted session; a missing or unreadable file is an empty session
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(state) => Self::with_state(state),
                Err(e) => {
                    tracing::warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    /// Persist the current state; an empty session removes the file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let state = self.snapshot();
        if state == SessionState::default() {
            return match std::fs::remove_file(path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&state)?;
        std::fs::write(path, raw)
    }
}
