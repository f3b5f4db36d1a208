//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Authenticate and validate requests before handlers run.
//! - Render every failure as the uniform JSON error envelope.
//! - Inject shared application state (`AppState`) into handlers.

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
