//! View resolution subsystem.
//!
//! # Data Flow
//! ```text
//! RouteMatch + AppState snapshot + UiConfig
//!     → composition.rs (pure render-plan construction)
//!     → RenderPlan (tagged: exactly one view tree, fully bound)
//!
//! RenderPlan.lazy_modules()
//!     → lazy.rs (per-module async cache)
//!     → NotLoaded → Loading → Ready, settled at most once
//! ```
//!
//! # Design Decisions
//! - Composition is a pure function of its inputs; same inputs, same plan
//! - The plan is a tagged enum, not duck-typed props: a consumer knows
//!   exactly which view and which bindings apply
//! - Lazy loading is the only suspension point, and it is idempotent

pub mod composition;
pub mod lazy;

pub use composition::{compose, resolve_and_compose, RenderPlan};
pub use lazy::{LoadError, LoadState, ViewLoader, ViewModule, ViewModuleId, ViewSource};
