//! Catalog flows: synchronize, read, create, update, delete.

use tokio_util::sync::CancellationToken;

use playbill_client::ApiError;
use playbill_core::forms::{production_schema, validate_draft};
use playbill_core::types::Id;
use playbill_core::{Production, ProductionDraft};
use playbill_events::Notice;

use crate::error::FlowError;
use crate::flows::guarded;
use crate::state::App;

impl App {
    /// Re-fetch the full catalog and make the store mirror it.
    ///
    /// Returns the number of records now held. Any failure leaves the
    /// store as it was and surfaces as an error notice.
    pub async fn refresh_productions(
        &self,
        cancel: &CancellationToken,
    ) -> Result<usize, FlowError> {
        let records = match guarded(cancel, self.api.list_productions()).await {
            Ok(records) => records,
            Err(e) => return Err(self.notify_failure(e)),
        };

        let count = self.productions.replace_all(records).await;
        tracing::debug!(count, "Catalog synchronized");
        Ok(count)
    }

    /// Fetch one production, crew included, for a detail view.
    ///
    /// The record goes straight to the caller; the store is not
    /// touched. An application failure carries the server's message
    /// for the view to render inline; a transport failure additionally
    /// raises a notice.
    pub async fn load_production(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<Production, FlowError> {
        guarded(cancel, self.api.get_production(id))
            .await
            .map_err(|e| self.notify_transport(e))
    }

    /// Create a production from a form draft.
    ///
    /// # Steps
    /// 1. Validate the draft locally; an invalid draft never reaches
    ///    the network.
    /// 2. Submit and await the server's confirmed record (201).
    /// 3. Mirror the confirmed record into the store.
    ///
    /// The returned record is the caller's navigation cue, handed back
    /// exactly once.
    pub async fn create_production(
        &self,
        draft: &ProductionDraft,
        cancel: &CancellationToken,
    ) -> Result<Production, FlowError> {
        // 1. Local gate.
        let report = validate_draft(&production_schema(), draft);
        if !report.is_submittable() {
            return Err(FlowError::Invalid(report));
        }

        // 2. Submit.
        let created = match guarded(cancel, self.api.create_production(draft)).await {
            Ok(created) => created,
            Err(e) => return Err(self.notify_transport(e)),
        };

        // 3. Mirror.
        if let Err(e) = self.productions.add(created.clone()).await {
            tracing::warn!(error = %e, "Created production collides with the store");
        }
        tracing::info!(id = created.id, title = %created.title, "Production created");
        Ok(created)
    }

    /// Update a production from a form draft.
    ///
    /// Same gate and contracts as [`App::create_production`]; success
    /// (200) replaces the stored record in place.
    pub async fn update_production(
        &self,
        id: Id,
        draft: &ProductionDraft,
        cancel: &CancellationToken,
    ) -> Result<Production, FlowError> {
        let report = validate_draft(&production_schema(), draft);
        if !report.is_submittable() {
            return Err(FlowError::Invalid(report));
        }

        let updated = match guarded(cancel, self.api.update_production(id, draft)).await {
            Ok(updated) => updated,
            Err(e) => return Err(self.notify_transport(e)),
        };

        if let Err(e) = self.productions.update(updated.clone()).await {
            tracing::warn!(error = %e, "Updated production is missing from the store");
        }
        tracing::info!(id = updated.id, "Production updated");
        Ok(updated)
    }

    /// Delete a production.
    ///
    /// On 204 the record leaves the store; the order of the remaining
    /// records is unchanged. Any failure raises an error notice and
    /// leaves the store as it was.
    pub async fn delete_production(
        &self,
        id: Id,
        cancel: &CancellationToken,
    ) -> Result<(), FlowError> {
        if let Err(e) = guarded(cancel, self.api.delete_production(id)).await {
            return Err(self.notify_failure(e));
        }

        if let Err(e) = self.productions.remove(id).await {
            tracing::warn!(error = %e, "Deleted production was not in the store");
        }
        tracing::info!(id, "Production deleted");
        Ok(())
    }

    // ---- failure routing ----

    /// Surface any API failure as an error notice. Cancellation is not
    /// a failure and stays silent.
    pub(crate) fn notify_failure(&self, err: FlowError) -> FlowError {
        if let FlowError::Api(api_err) = &err {
            self.notices.publish(Notice::error(api_err.display_message()));
        }
        err
    }

    /// Surface only transport failures as a notice; application
    /// rejections flow back to the caller for inline display.
    pub(crate) fn notify_transport(&self, err: FlowError) -> FlowError {
        if let FlowError::Api(api_err @ ApiError::Transport(_)) = &err {
            self.notices.publish(Notice::error(api_err.display_message()));
        }
        err
    }
}
