//! build-test: a minimal HTTP service exposing a liveness endpoint.
//!
//! `GET /health` answers `200 OK` with the plain-text body `OK`. Around it sit
//! TOML configuration, `tracing` logging with per-request ids, and a plain
//! HTTP server with graceful shutdown.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
