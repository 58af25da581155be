//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session invariant: `user` is non-null exactly while the phase
//! is `Authenticated`. The durable copy (session slot in localStorage) may
//! go stale if the backend invalidates the token; the boot-time restore
//! marks the session authenticated optimistically from the snapshot, then
//! revalidates against `/auth/me` and logs out on failure. That brief
//! window of trusting local data is acceptable only because every server
//! endpoint independently re-validates the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{Get, RwSignal, Update};

use crate::net::api::{self, ApiError};
use crate::net::types::{AuthSession, Credentials, SignupPayload, User};
use crate::util::storage;

/// Durable localStorage key for the session slot.
pub const SESSION_KEY: &str = "builder_session";

/// Startup lifecycle of the session: `Restoring` until the durable slot has
/// been consulted, then `Authenticated` or `Anonymous`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// The durable slot has not been read yet.
    #[default]
    Restoring,
    /// A user is logged in (optimistically or confirmed).
    Authenticated,
    /// No session exists.
    Anonymous,
}

/// Authentication state tracking the current user and startup phase.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: AuthPhase,
}

impl AuthState {
    /// True while a user is present and the phase agrees.
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated && self.user.is_some()
    }

    /// True until the boot-time restore has resolved the phase.
    pub fn is_restoring(&self) -> bool {
        self.phase == AuthPhase::Restoring
    }

    /// Install a user and mark the session authenticated.
    pub fn apply_session(&mut self, user: User) {
        self.user = Some(user);
        self.phase = AuthPhase::Authenticated;
    }

    /// Drop the user and mark the session anonymous. Idempotent.
    pub fn clear(&mut self) {
        self.user = None;
        self.phase = AuthPhase::Anonymous;
    }

    /// Merge partial updates into the current user.
    ///
    /// Returns `false` without touching anything while logged out — the
    /// operation has a session precondition.
    pub fn merge_user(&mut self, updates: &UserUpdate) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        if let Some(name) = &updates.name {
            user.name.clone_from(name);
        }
        if let Some(email) = &updates.email {
            user.email.clone_from(email);
        }
        true
    }
}

/// Partial user-record update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Authenticate and install the session.
///
/// On success the `{user, token}` payload is persisted wholesale to the
/// durable slot and the in-memory state flips to authenticated. On failure
/// state is left untouched and the error is returned for the caller to
/// surface.
///
/// # Errors
///
/// Propagates the normalized API failure.
pub async fn login(auth: RwSignal<AuthState>, credentials: &Credentials) -> Result<User, ApiError> {
    let session = api::login(credentials).await?;
    Ok(install_session(auth, session))
}

/// Create an account and install the session. Same contract as [`login`].
///
/// # Errors
///
/// Propagates the normalized API failure.
pub async fn signup(auth: RwSignal<AuthState>, payload: &SignupPayload) -> Result<User, ApiError> {
    let session = api::signup(payload).await?;
    Ok(install_session(auth, session))
}

fn install_session(auth: RwSignal<AuthState>, session: AuthSession) -> User {
    storage::save_json(SESSION_KEY, &session);
    auth.update(|state| state.apply_session(session.user.clone()));
    session.user
}

/// Clear the session and the pending document, in memory and durably.
/// Never fails; calling twice has the same effect as once.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::remove(SESSION_KEY);
    crate::state::document::clear_pending();
    auth.update(AuthState::clear);
}

/// Merge partial updates into the in-memory and durable user record.
/// No-op while logged out.
pub fn update_user(auth: RwSignal<AuthState>, updates: &UserUpdate) {
    let mut changed = false;
    auth.update(|state| changed = state.merge_user(updates));
    if !changed {
        return;
    }
    if let Some(mut session) = storage::load_json::<AuthSession>(SESSION_KEY) {
        if let Some(user) = auth.get().user {
            session.user = user;
            storage::save_json(SESSION_KEY, &session);
        }
    }
}

/// Boot-time session restoration.
///
/// With no durable slot the phase resolves straight to anonymous. With one,
/// the stored snapshot is trusted optimistically, then revalidated against
/// the backend in the background; a failed revalidation performs a full
/// [`logout`].
pub fn restore_session(auth: RwSignal<AuthState>) {
    let Some(session) = storage::load_json::<AuthSession>(SESSION_KEY) else {
        auth.update(AuthState::clear);
        return;
    };
    auth.update(|state| state.apply_session(session.user));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::me().await {
            Ok(user) => {
                if let Some(mut stored) = storage::load_json::<AuthSession>(SESSION_KEY) {
                    stored.user = user.clone();
                    storage::save_json(SESSION_KEY, &stored);
                }
                auth.update(|state| state.apply_session(user));
            }
            Err(err) => {
                leptos::logging::warn!("session revalidation failed: {err}");
                logout(auth);
            }
        }
    });
}

/// Central 401 policy: a rejected bearer token invalidates the local
/// session. Returns `true` when a logout was performed.
pub fn invalidate_if_unauthorized(auth: RwSignal<AuthState>, err: &ApiError) -> bool {
    if err.is_unauthorized() {
        logout(auth);
        return true;
    }
    false
}
