//! REST API client for the theater HTTP endpoints.
//!
//! Wraps the theater API (production catalog CRUD, registration,
//! login/logout, session probe) using [`reqwest`]. Each method encodes
//! one endpoint's exact success contract: where the server promises a
//! specific status, anything else -- even another 2xx -- is a failure.

use std::time::Duration;

use reqwest::StatusCode;

use playbill_core::types::Id;
use playbill_core::{LoginDraft, Production, ProductionDraft, SignupDraft, User};

use crate::config::ClientConfig;
use crate::error::{ApiError, ServerMessage};

/// HTTP client for a single theater API server.
///
/// Holds a cookie store, so a successful [`log_in`](TheaterApi::log_in)
/// leaves the session cookie in place for every later call.
pub struct TheaterApi {
    client: reqwest::Client,
    base_url: String,
}

impl TheaterApi {
    /// Create a new API client from configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// The caller is responsible for enabling a cookie store if the
    /// session endpoints are going to be used.
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---------- productions ----------

    /// Fetch the full production list.
    ///
    /// Sends `GET /productions`; any 2xx answer carries the ordered
    /// array of records.
    pub async fn list_productions(&self) -> Result<Vec<Production>, ApiError> {
        let response = self
            .client
            .get(format!("{}/productions", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch one production with its crew.
    ///
    /// Sends `GET /productions/{id}`; success is exactly 200. A 404
    /// body carries the server's "could not find" message.
    pub async fn get_production(&self, id: Id) -> Result<Production, ApiError> {
        let response = self
            .client
            .get(format!("{}/productions/{}", self.base_url, id))
            .send()
            .await?;

        Self::parse_with_status(response, StatusCode::OK).await
    }

    /// Create a production from a validated draft.
    ///
    /// Sends `POST /productions`; success is exactly 201 and yields the
    /// server's version of the record (with its assigned id).
    pub async fn create_production(&self, draft: &ProductionDraft) -> Result<Production, ApiError> {
        let response = self
            .client
            .post(format!("{}/productions", self.base_url))
            .json(draft)
            .send()
            .await?;

        Self::parse_with_status(response, StatusCode::CREATED).await
    }

    /// Update a production from a validated draft.
    ///
    /// Sends `PATCH /productions/{id}` with the full draft; success is
    /// exactly 200 and yields the updated record.
    pub async fn update_production(
        &self,
        id: Id,
        draft: &ProductionDraft,
    ) -> Result<Production, ApiError> {
        let response = self
            .client
            .patch(format!("{}/productions/{}", self.base_url, id))
            .json(draft)
            .send()
            .await?;

        Self::parse_with_status(response, StatusCode::OK).await
    }

    /// Delete a production.
    ///
    /// Sends `DELETE /productions/{id}`; success is exactly 204 with an
    /// empty body.
    pub async fn delete_production(&self, id: Id) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/productions/{}", self.base_url, id))
            .send()
            .await?;

        Self::check_status(response, StatusCode::NO_CONTENT).await
    }

    // ---------- auth & session ----------

    /// Register a new account.
    ///
    /// Sends `POST /signup`; any 2xx answer yields the created [`User`]
    /// and sets the session cookie.
    pub async fn sign_up(&self, draft: &SignupDraft) -> Result<User, ApiError> {
        let response = self
            .client
            .post(format!("{}/signup", self.base_url))
            .json(draft)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Authenticate with email and password.
    ///
    /// Sends `POST /login`; any 2xx answer yields the [`User`] and sets
    /// the session cookie. Wrong credentials come back as a non-2xx
    /// status whose body carries the server's message.
    pub async fn log_in(&self, draft: &LoginDraft) -> Result<User, ApiError> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(draft)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// End the current session.
    ///
    /// Sends `DELETE /logout`; success is exactly 204.
    pub async fn log_out(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/logout", self.base_url))
            .send()
            .await?;

        Self::check_status(response, StatusCode::NO_CONTENT).await
    }

    /// Probe the current session.
    ///
    /// Sends `GET /me`; any 2xx answer yields the signed-in [`User`].
    /// Any failure simply means the caller is anonymous.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let response = self
            .client
            .get(format!("{}/me", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success (2xx) status code. Returns the
    /// response unchanged on success, or an [`ApiError::Api`] carrying
    /// the status and decoded message on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::failure(status, response).await);
        }
        Ok(response)
    }

    /// Ensure the response has exactly the expected status code. Any
    /// other status -- including another 2xx -- is a failure.
    async fn ensure_status(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status != expected {
            return Err(Self::failure(status, response).await);
        }
        Ok(response)
    }

    /// Decode a failure response into an [`ApiError::Api`].
    async fn failure(status: StatusCode, response: reqwest::Response) -> ApiError {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        ApiError::Api {
            status: status.as_u16(),
            message: ServerMessage::from_body(&body),
        }
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Parse a JSON response body gated behind an exact status.
    async fn parse_with_status<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_status(response, expected).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert an exact status, discarding the body.
    async fn check_status(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<(), ApiError> {
        Self::ensure_status(response, expected).await?;
        Ok(())
    }
}
