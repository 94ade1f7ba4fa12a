//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{Entry, EntryId, Sentiment};

/// Create a test entry with default values
pub fn test_entry() -> Entry {
    test_entry_with("Test entry", "Nothing much happened today.", Sentiment::Neutral)
}

/// Create a test entry with specific fields
pub fn test_entry_with(title: &str, content: &str, sentiment: Sentiment) -> Entry {
    Entry {
        id: EntryId::new(),
        title: title.to_string(),
        content: content.to_string(),
        sentiment,
        created_at: Utc::now(),
    }
}
