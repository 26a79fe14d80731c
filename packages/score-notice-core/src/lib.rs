//! Core of the score notice generator.
//!
//! Parses spreadsheet rows pasted as tab-separated text into records under a
//! per-category schema, and renders each record into a notification message
//! by substituting quote-wrapped `"{field}"` placeholders in an editable
//! per-category template.

pub mod category;
pub mod clipboard;
pub mod collection;
pub mod config;
pub mod error;
pub mod record;
pub mod schema;
pub mod session;
pub mod template;

pub use category::Category;
pub use error::{NoticeError, Result};
pub use session::NoticeSession;
