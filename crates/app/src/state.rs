//! Shared application handle.

use std::sync::Arc;

use playbill_client::{ApiError, ClientConfig, TheaterApi};
use playbill_events::NoticeBus;
use playbill_store::{CurrentUser, ProductionStore};

/// Shared handle to every long-lived piece of the client.
///
/// This is cheaply cloneable (inner data is behind `Arc`); each view
/// clones the handle and drives the flows in [`crate::flows`] through
/// it.
#[derive(Clone)]
pub struct App {
    /// REST client for the theater API. Owns the session cookie.
    pub api: Arc<TheaterApi>,
    /// Canonical production list, mirrored from the server.
    pub productions: Arc<ProductionStore>,
    /// The zero-or-one signed-in user.
    pub session: Arc<CurrentUser>,
    /// Notification hub view code subscribes to.
    pub notices: Arc<NoticeBus>,
}

impl App {
    /// Build the application from explicit configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            api: Arc::new(TheaterApi::new(config)?),
            productions: Arc::new(ProductionStore::new()),
            session: Arc::new(CurrentUser::new()),
            notices: Arc::new(NoticeBus::default()),
        })
    }

    /// Build the application from environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env())
    }
}
