/// Client configuration loaded from environment variables.
///
/// All fields default to values suitable for a local development
/// server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the theater API (default: `http://127.0.0.1:5555`).
    pub base_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `PLAYBILL_API_URL`              | `http://127.0.0.1:5555` |
    /// | `PLAYBILL_REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PLAYBILL_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5555".into());

        let request_timeout_secs: u64 = std::env::var("PLAYBILL_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("PLAYBILL_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5555".into(),
            request_timeout_secs: 30,
        }
    }
}
