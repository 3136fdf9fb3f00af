//! Snapshot-swapped state store.
//!
//! # Responsibilities
//! - Hold the current `AppState` behind an atomic snapshot
//! - Apply mutations as copy-on-write swaps
//! - Notify subscribers after every mutation
//!
//! # Design Decisions
//! - Readers never block: `snapshot()` is a lock-free Arc load
//! - Writers go through `rcu`, so concurrent mutations serialize
//!   without a dedicated lock
//! - Subscribers get a monotonically increasing version, not the state
//!   itself; they re-read the snapshot when woken

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

use crate::state::alerts::{Alert, AlertState};
use crate::state::session::{Session, UserIdentity};

/// The state shape the resolver consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub current_user: Session,
    pub alerts: AlertState,
}

/// Shared application state with change notification.
pub struct StateStore {
    state: ArcSwap<AppState>,
    version: watch::Sender<u64>,
}

impl StateStore {
    pub fn new(initial: AppState) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            state: ArcSwap::from_pointee(initial),
            version,
        }
    }

    /// The latest settled state, as an immutable snapshot.
    pub fn snapshot(&self) -> Arc<AppState> {
        self.state.load_full()
    }

    /// Subscribe to mutation notifications.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Current mutation counter.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    fn mutate<F>(&self, apply: F)
    where
        F: Fn(&mut AppState),
    {
        self.state.rcu(|current| {
            let mut next = AppState::clone(current);
            apply(&mut next);
            next
        });
        self.version.send_modify(|v| *v += 1);
    }

    pub fn sign_in(&self, user: UserIdentity) {
        tracing::info!(user_id = %user.id, username = %user.username, "Session established");
        self.mutate(|state| state.current_user = Session::SignedIn(user.clone()));
    }

    pub fn sign_out(&self) {
        tracing::info!("Session cleared");
        self.mutate(|state| state.current_user = Session::Anonymous);
    }

    /// Replace the signed-in identity (e.g. after a profile update).
    /// No-op for anonymous sessions.
    pub fn update_user(&self, user: UserIdentity) {
        self.mutate(|state| {
            if state.current_user.is_authenticated() {
                state.current_user = Session::SignedIn(user.clone());
            }
        });
    }

    pub fn push_alert(&self, alert: Alert) {
        tracing::debug!(kind = ?alert.kind, message = %alert.message, "Alert raised");
        self.mutate(|state| state.alerts.set(alert.clone()));
    }

    pub fn remove_alert(&self) {
        self.mutate(|state| state.alerts.clear());
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
