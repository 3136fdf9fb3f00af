//! Asynchronous action-creator contracts.
//!
//! # Data Flow
//! ```text
//! Leaf view submits (credentials, email, new password)
//!     → AuthActions impl (network call, external to this crate)
//!     → Ok: store mutator (sign_in / success alert)
//!     → Err: ActionError → error alert on the store
//! ```
//!
//! # Design Decisions
//! - The resolver never awaits actions; it only reads settled state
//! - Failures surface as alerts, never as panics or resolver errors
//! - Retry policy, if any, lives behind the trait impl

use futures_util::future::BoxFuture;
use serde::Serialize;
use thiserror::Error;

use crate::state::{Alert, Session, StateStore};

/// Sign-in vs. sign-up intent for the shared auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Credentials submitted through the auth form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Failure from an external action creator.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("could not send reset email: {0}")]
    Email(String),
    #[error("password reset rejected: {0}")]
    Reset(String),
}

/// The action surface a leaf view can be wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    AuthUser,
    SendResetEmail,
    ResetPassword,
    RemoveAlert,
}

/// External collaborator performing the actual auth network calls.
pub trait AuthActions: Send + Sync {
    fn auth_user(
        &self,
        mode: AuthMode,
        credentials: Credentials,
    ) -> BoxFuture<'_, Result<Session, ActionError>>;

    fn send_reset_email(&self, address: &str) -> BoxFuture<'_, Result<(), ActionError>>;

    fn reset_password(
        &self,
        username: &str,
        token: &str,
        new_password: &str,
    ) -> BoxFuture<'_, Result<(), ActionError>>;
}

/// Surface an action failure as a pending alert.
pub fn report_error(store: &StateStore, err: &ActionError) {
    store.push_alert(Alert::error(err.to_string()));
}

/// Run the auth action and fold its result into the store.
pub async fn run_auth(
    store: &StateStore,
    actions: &dyn AuthActions,
    mode: AuthMode,
    credentials: Credentials,
) {
    match actions.auth_user(mode, credentials).await {
        Ok(Session::SignedIn(user)) => store.sign_in(user),
        Ok(Session::Anonymous) => store.sign_out(),
        Err(err) => report_error(store, &err),
    }
}

/// Run the reset-password action and fold its result into the store.
pub async fn run_reset_password(
    store: &StateStore,
    actions: &dyn AuthActions,
    username: &str,
    token: &str,
    new_password: &str,
) {
    match actions.reset_password(username, token, new_password).await {
        Ok(()) => store.push_alert(Alert::success("Password updated. Please sign in.")),
        Err(err) => report_error(store, &err),
    }
}

/// Run the reset-email action and fold its result into the store.
pub async fn run_send_reset_email(store: &StateStore, actions: &dyn AuthActions, address: &str) {
    match actions.send_reset_email(address).await {
        Ok(()) => store.push_alert(Alert::success("Reset email sent.")),
        Err(err) => report_error(store, &err),
    }
}
