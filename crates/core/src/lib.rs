//! Domain types and form validation for the playbill client.
//!
//! Everything in this crate is pure logic shared by the rest of the
//! workspace:
//!
//! - [`models`] — the `Production`, `CastMember`, and `User` records as
//!   the theater API serves them, plus the client-owned draft DTOs.
//! - [`forms`] — the schema-driven validation engine and per-form
//!   draft state.
//!
//! Nothing here performs I/O. Network access lives in
//! `playbill-client`, shared state in `playbill-store`.

pub mod forms;
pub mod models;
pub mod types;

pub use forms::{FormState, ValidationReport};
pub use models::production::{CastMember, Genre, Production, ProductionDraft};
pub use models::user::{LoginDraft, SignupDraft, User};
