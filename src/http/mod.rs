//! HTTP server module.
//!
//! Serves plain HTTP; TLS is expected to terminate at a reverse proxy or load
//! balancer in front of the service. The server drains connections gracefully
//! on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
