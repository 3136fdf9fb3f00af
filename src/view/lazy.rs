//! Lazy view-module loading.
//!
//! # Responsibilities
//! - Track per-module load state: NotLoaded → Loading → Ready
//! - Fetch each module at most once; concurrent loads coalesce
//! - Keep settled modules cached for the lifetime of the loader
//!
//! # Design Decisions
//! - Loading is the only suspension point in the whole crate
//! - A failed fetch leaves the slot empty, so a later navigation can
//!   retry; a caller that navigates away simply drops its future
//! - The fetch itself lives behind `ViewSource`, keeping this cache
//!   free of I/O policy

use dashmap::DashMap;
use futures_util::future::BoxFuture;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Identifier of a deferred view module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewModuleId {
    AuthForm,
    EmailForm,
    ResetPasswordForm,
    UpdateForm,
    AlertBanner,
    SubscriptionsList,
    UserAside,
}

impl ViewModuleId {
    pub const ALL: [ViewModuleId; 7] = [
        ViewModuleId::AuthForm,
        ViewModuleId::EmailForm,
        ViewModuleId::ResetPasswordForm,
        ViewModuleId::UpdateForm,
        ViewModuleId::AlertBanner,
        ViewModuleId::SubscriptionsList,
        ViewModuleId::UserAside,
    ];

    /// Artifact name the module is fetched under.
    pub fn chunk_name(&self) -> &'static str {
        match self {
            ViewModuleId::AuthForm => "auth-form",
            ViewModuleId::EmailForm => "email-form",
            ViewModuleId::ResetPasswordForm => "reset-password-form",
            ViewModuleId::UpdateForm => "update-form",
            ViewModuleId::AlertBanner => "alert-banner",
            ViewModuleId::SubscriptionsList => "subscriptions-list",
            ViewModuleId::UserAside => "user-aside",
        }
    }
}

impl fmt::Display for ViewModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chunk_name())
    }
}

/// A loaded view module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModule {
    pub id: ViewModuleId,
    pub chunk: String,
}

/// Failure while acquiring a view module.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("view source failed for {module}: {reason}")]
    Source {
        module: ViewModuleId,
        reason: String,
    },
}

/// Where module code actually comes from (bundle, network, disk).
pub trait ViewSource: Send + Sync {
    fn fetch(&self, id: ViewModuleId) -> BoxFuture<'_, Result<ViewModule, LoadError>>;
}

/// Built-in source resolving every module to its chunk name.
#[derive(Debug, Default)]
pub struct StaticViewSource;

impl ViewSource for StaticViewSource {
    fn fetch(&self, id: ViewModuleId) -> BoxFuture<'_, Result<ViewModule, LoadError>> {
        Box::pin(async move {
            Ok(ViewModule {
                id,
                chunk: id.chunk_name().to_string(),
            })
        })
    }
}

/// Observable load state of one module slot.
///
/// `Loading` means at least one fetch is actually in flight; a slot
/// whose only fetch failed reads as `NotLoaded` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Ready(Arc<ViewModule>),
}

struct Slot {
    cell: OnceCell<Arc<ViewModule>>,
    in_flight: AtomicUsize,
}

impl Slot {
    fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            in_flight: AtomicUsize::new(0),
        }
    }
}

/// Decrements the in-flight counter even when a load is abandoned.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Per-module async cache. Cloned handles share the same slots.
#[derive(Clone)]
pub struct ViewLoader {
    source: Arc<dyn ViewSource>,
    slots: Arc<DashMap<ViewModuleId, Arc<Slot>>>,
}

impl ViewLoader {
    pub fn new(source: Arc<dyn ViewSource>) -> Self {
        Self {
            source,
            slots: Arc::new(DashMap::new()),
        }
    }

    fn slot(&self, id: ViewModuleId) -> Arc<Slot> {
        self.slots
            .entry(id)
            .or_insert_with(|| Arc::new(Slot::new()))
            .clone()
    }

    /// Load a module, reusing the cached instance once settled.
    ///
    /// Concurrent calls for the same module share a single fetch. A
    /// failed fetch is not cached, so the next call retries.
    pub async fn load(&self, id: ViewModuleId) -> Result<Arc<ViewModule>, LoadError> {
        let slot = self.slot(id);
        slot.in_flight.fetch_add(1, Ordering::SeqCst);
        let _in_flight = InFlight(&slot.in_flight);

        let module = slot
            .cell
            .get_or_try_init(|| async {
                tracing::debug!(module = %id, "Fetching view module");
                self.source.fetch(id).await.map(Arc::new)
            })
            .await?;
        Ok(module.clone())
    }

    /// Current state of a module slot.
    pub fn state(&self, id: ViewModuleId) -> LoadState {
        match self.slots.get(&id) {
            None => LoadState::NotLoaded,
            Some(slot) => match slot.cell.get() {
                Some(module) => LoadState::Ready(module.clone()),
                None if slot.in_flight.load(Ordering::SeqCst) > 0 => LoadState::Loading,
                None => LoadState::NotLoaded,
            },
        }
    }
}

impl Default for ViewLoader {
    fn default() -> Self {
        Self::new(Arc::new(StaticViewSource))
    }
}
