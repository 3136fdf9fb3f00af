//! Application state subsystem.
//!
//! # Data Flow
//! ```text
//! Action settles (sign-in, reset, alert)
//!     → store.rs mutator
//!     → new AppState snapshot swapped in atomically
//!     → version bump on the watch channel
//!     → subscribers re-resolve against the fresh snapshot
//! ```
//!
//! # Design Decisions
//! - No global mutable state: readers take an immutable Arc snapshot
//! - Mutations go through named store methods, never field pokes
//! - At most one pending alert; a new alert replaces the old one
//! - Session is replaced wholesale on sign-out, never patched

pub mod alerts;
pub mod session;
pub mod store;

pub use alerts::{Alert, AlertKind, AlertState};
pub use session::{Session, UserIdentity};
pub use store::{AppState, StateStore};
