//! Async REST client for the theater API.
//!
//! - [`TheaterApi`] — one method per endpoint, each enforcing the exact
//!   status contract that endpoint promises.
//! - [`ClientConfig`] — environment-driven configuration.
//! - [`ApiError`] / [`ServerMessage`] — the failure taxonomy, covering
//!   both failure-body shapes the server is known to produce.
//!
//! The session is an opaque server cookie; the client carries it in its
//! cookie store, so a login call is all it takes for subsequent calls
//! to be authenticated.

pub mod api;
pub mod config;
pub mod error;

pub use api::TheaterApi;
pub use config::ClientConfig;
pub use error::{ApiError, ServerMessage};
