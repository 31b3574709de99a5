//! Account flows: registration, login, logout, and the session probe.

use tokio_util::sync::CancellationToken;

use playbill_core::forms::{login_schema, signup_schema, validate_draft};
use playbill_core::{LoginDraft, SignupDraft, User};

use crate::error::FlowError;
use crate::flows::guarded;
use crate::state::App;

impl App {
    /// Register a new account.
    ///
    /// Validates the draft locally first; an invalid draft never
    /// reaches the network. On success the new user becomes the
    /// current session and comes back as the caller's navigation cue.
    /// A server rejection (taken username, taken email) is published
    /// as an error notice; the session stays as it was.
    pub async fn sign_up(
        &self,
        draft: &SignupDraft,
        cancel: &CancellationToken,
    ) -> Result<User, FlowError> {
        let report = validate_draft(&signup_schema(), draft);
        if !report.is_submittable() {
            return Err(FlowError::Invalid(report));
        }

        let user = match guarded(cancel, self.api.sign_up(draft)).await {
            Ok(user) => user,
            Err(e) => return Err(self.notify_failure(e)),
        };

        self.session.set(user.clone()).await;
        tracing::info!(username = %user.username, "Account created, signed in");
        Ok(user)
    }

    /// Authenticate with email and password.
    ///
    /// Same shape as [`App::sign_up`]: local gate, then the request.
    /// Wrong credentials surface as an error notice carrying the
    /// server's message, never as inline field errors.
    pub async fn log_in(
        &self,
        draft: &LoginDraft,
        cancel: &CancellationToken,
    ) -> Result<User, FlowError> {
        let report = validate_draft(&login_schema(), draft);
        if !report.is_submittable() {
            return Err(FlowError::Invalid(report));
        }

        let user = match guarded(cancel, self.api.log_in(draft)).await {
            Ok(user) => user,
            Err(e) => return Err(self.notify_failure(e)),
        };

        self.session.set(user.clone()).await;
        tracing::info!(username = %user.username, "Signed in");
        Ok(user)
    }

    /// End the current session.
    ///
    /// Only a confirmed 204 clears the local session; on failure the
    /// user stays signed in locally and a notice reports why.
    pub async fn log_out(&self, cancel: &CancellationToken) -> Result<(), FlowError> {
        if let Err(e) = guarded(cancel, self.api.log_out()).await {
            return Err(self.notify_failure(e));
        }

        self.session.clear().await;
        tracing::info!("Signed out");
        Ok(())
    }

    /// Ask the server who the session cookie belongs to.
    ///
    /// Runs silently at boot. Any API failure just means the caller is
    /// anonymous: the session is cleared, nothing is published, and
    /// the flow still succeeds. Only cancellation propagates.
    pub async fn probe_session(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<User>, FlowError> {
        match guarded(cancel, self.api.current_user()).await {
            Ok(user) => {
                self.session.set(user.clone()).await;
                tracing::debug!(username = %user.username, "Session restored");
                Ok(Some(user))
            }
            Err(FlowError::Api(e)) => {
                tracing::debug!(error = %e, "No session to restore");
                self.session.clear().await;
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }
}
