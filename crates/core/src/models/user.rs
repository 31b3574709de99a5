//! User entity model and auth form drafts.

use serde::{Deserialize, Serialize};

use crate::types::Id;

/// The authenticated account as the server returns it.
///
/// Some auth responses omit `email`; it deserializes to empty rather
/// than failing the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Form draft for registration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Form draft for login.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}
