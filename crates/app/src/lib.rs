//! Application control layer for the playbill client.
//!
//! Ties the lower crates together and exposes the operations that view
//! code drives:
//!
//! - [`App`] -- shared handle bundling the API client, the production
//!   store, the session holder, and the notice bus.
//! - [`flows`] -- boot, catalog CRUD, registration, login, logout, and
//!   the silent session probe.
//! - [`FlowError`] -- what a flow hands back when it does not succeed.

pub mod error;
pub mod flows;
pub mod state;

pub use error::FlowError;
pub use state::App;
