//! Client-side shared state for the playbill workspace.
//!
//! - [`ProductionStore`] — the canonical in-memory production list,
//!   unique by id and order-preserving.
//! - [`CurrentUser`] — the zero-or-one authenticated user.
//!
//! Both are `tokio::sync::RwLock` state meant to be shared via `Arc`.
//! Every mutation mirrors a server-confirmed change; the flows in
//! `playbill-app` are the only writers.

pub mod productions;
pub mod session;

pub use productions::{ProductionStore, StoreError};
pub use session::CurrentUser;
