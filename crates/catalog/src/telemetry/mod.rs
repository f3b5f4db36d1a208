//! Structured logging, with optional span export over OTLP.
//!
//! # Telemetry invariants
//!
//! - API keys must never appear in any span attribute or log field.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`); `RUST_LOG`
//!   overrides it when set.

pub mod init;

pub use init::init_telemetry;
