//! Shared fixtures for integration tests.

use folio_router::state::{Alert, AppState, Session, UserIdentity};

#[allow(dead_code)]
pub fn anonymous_state() -> AppState {
    AppState::default()
}

pub fn signed_in_state(id: &str, username: &str) -> AppState {
    AppState {
        current_user: Session::SignedIn(UserIdentity {
            id: id.to_string(),
            username: username.to_string(),
        }),
        alerts: Default::default(),
    }
}

#[allow(dead_code)]
pub fn with_alert(mut state: AppState, message: &str) -> AppState {
    state.alerts.set(Alert::error(message));
    state
}
