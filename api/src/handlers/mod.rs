//! HTTP handlers
//!
//! Axum request handlers for the journal pages.

pub mod entries;

pub use entries::{create_entry, get_entry, list_entries, new_entry_form, submit_new_entry};
