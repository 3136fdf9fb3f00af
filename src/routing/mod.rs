//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (URL path)
//!     → router.rs (ordered route lookup)
//!     → pattern.rs (segment matching, parameter binding)
//!     → Return: RouteMatch { view, params } or None
//!
//! Table Construction (at startup):
//!     table.rs declares the fixed URL surface
//!     → Patterns compiled once
//!     → Frozen as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable afterwards
//! - No regex; exact per-segment comparison only
//! - Deterministic: same path always resolves to the same route
//! - First match wins, in declaration order
//! - Explicit None for unmatched paths rather than a silent default

pub mod pattern;
pub mod router;
pub mod table;

pub use pattern::{PathPattern, RouteParams};
pub use router::{Route, RouteMatch, RouteTable, RouteView};
pub use table::reading_app_table;
