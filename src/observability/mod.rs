//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; resolution, store mutations and
//!   lazy loads all carry fields (`path`, `view`, `module`)
//! - Filter comes from config, `RUST_LOG` wins when set
//! - No metrics exporter: this crate runs inside a client shell, logs
//!   are its only telemetry

pub mod logging;
