//! Client-side route resolution for a social reading application.
//!
//! # Architecture Overview
//!
//! ```text
//!   URL path ──▶ routing (ordered first-match table)
//!                    │
//!                    ▼
//!              RouteMatch { view, params }
//!                    │            AppState snapshot
//!                    ▼                 │
//!              view::composition ◀─────┘
//!                    │
//!                    ▼
//!              RenderPlan (tagged view tree)
//!                    │
//!                    ▼
//!              view::lazy (deferred module cache)
//!
//!   Cross-cutting: state (snapshot store + watch channel),
//!   actions (async auth contracts), config, observability
//! ```
//!
//! Resolution and composition are pure and synchronous; the lazy module
//! cache is the only suspension point.

pub mod actions;
pub mod config;
pub mod observability;
pub mod routing;
pub mod state;
pub mod view;

pub use config::AppConfig;
pub use routing::{reading_app_table, RouteMatch, RouteTable, RouteView};
pub use state::{AppState, StateStore};
pub use view::{resolve_and_compose, RenderPlan, ViewLoader};
