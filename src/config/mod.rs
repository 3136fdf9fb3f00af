//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared by reference with the composer and the CLI
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - Every field defaults to the application's stock wording, so an
//!   absent or empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports all errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, FormText, RoutingConfig, UiConfig};
