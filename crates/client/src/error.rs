//! Error taxonomy for the theater API client.

use serde::Deserialize;
use serde_json::Value;

/// Body shape of a failure response: `{"message": ...}`.
#[derive(Debug, Deserialize)]
struct FailureBody {
    message: ServerMessage,
}

/// A server-supplied failure message.
///
/// The API answers some failures with a single string and others with a
/// mapping from field name to reason(s); both shapes are decoded
/// defensively since the server does not document which it will use.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Text(String),
    Fields(serde_json::Map<String, Value>),
}

impl ServerMessage {
    /// Decode a raw failure body.
    ///
    /// Bodies without a parsable `message` member fall back to the raw
    /// text so nothing the server said is lost.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<FailureBody>(body) {
            Ok(parsed) => parsed.message,
            Err(_) => ServerMessage::Text(body.trim().to_string()),
        }
    }
}

/// Field mappings flatten to one string by concatenating every reason
/// in enumeration order; a list of reasons joins with commas.
impl std::fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerMessage::Text(text) => f.write_str(text),
            ServerMessage::Fields(fields) => {
                for value in fields.values() {
                    write_reason(f, value)?;
                }
                Ok(())
            }
        }
    }
}

fn write_reason(f: &mut std::fmt::Formatter<'_>, value: &Value) -> std::fmt::Result {
    match value {
        Value::String(reason) => f.write_str(reason),
        Value::Array(reasons) => {
            for (i, reason) in reasons.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_reason(f, reason)?;
            }
            Ok(())
        }
        other => write!(f, "{other}"),
    }
}

/// Errors from the theater REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside the operation's
    /// success contract.
    #[error("theater API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Decoded failure message.
        message: ServerMessage,
    },
}

impl ApiError {
    /// The display form of the failure, for notices and inline form text.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Transport(e) => e.to_string(),
            ApiError::Api { message, .. } => message.to_string(),
        }
    }

    /// The HTTP status, when the server did answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Api { status, .. } => Some(*status),
        }
    }
}
