//! Domain records and draft DTOs.

pub mod production;
pub mod user;
