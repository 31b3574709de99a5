/// All server-assigned identifiers are numeric.
pub type Id = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
