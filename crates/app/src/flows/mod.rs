//! The operations views drive.
//!
//! Every flow takes the [`CancellationToken`] owned by the initiating
//! view. The network await runs under `tokio::select!` against that
//! token, so a view torn down mid-flight discards the late response
//! instead of mutating state it no longer owns. A cancelled flow
//! reports [`FlowError::Cancelled`] and touches nothing.

pub mod auth;
pub mod productions;

use std::future::Future;

use tokio_util::sync::CancellationToken;

use playbill_client::ApiError;

use crate::error::FlowError;
use crate::state::App;

impl App {
    /// Start-of-session work: fetch the catalog and probe the session.
    ///
    /// The two requests overlap and neither waits on the other. Each
    /// half reports through its own flow; boot itself only logs.
    pub async fn boot(&self, cancel: &CancellationToken) {
        let (catalog, probe) = tokio::join!(
            self.refresh_productions(cancel),
            self.probe_session(cancel),
        );

        if let Err(e) = catalog {
            tracing::debug!(error = %e, "Catalog fetch failed during boot");
        }
        match probe {
            Ok(Some(user)) => tracing::debug!(username = %user.username, "Booted signed in"),
            Ok(None) => tracing::debug!("Booted anonymous"),
            Err(e) => tracing::debug!(error = %e, "Session probe cancelled during boot"),
        }
    }
}

/// Await one client call under the view's cancellation token.
///
/// `biased` makes cancellation win when both sides are ready, so an
/// already-cancelled token never lets the call start.
pub(crate) async fn guarded<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, FlowError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(FlowError::Cancelled),
        result = call => result.map_err(FlowError::from),
    }
}
