//! Non-blocking user notifications for the playbill client.
//!
//! - [`NoticeBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`Notice`] — a single toast-style notification.

pub mod bus;

pub use bus::{Notice, NoticeBus, NoticeLevel};
