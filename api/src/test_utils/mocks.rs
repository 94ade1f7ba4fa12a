//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Entry, EntryId, NewEntry, Sentiment};
use crate::domain::ports::{EntryRepository, SentimentAnalyzer};
use crate::error::DomainError;

// ============================================================================
// In-Memory Entry Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an entry for testing
    pub fn with_entry(self, entry: Entry) -> Self {
        self.entries.write().unwrap().push(entry);
        self
    }

    /// Number of stored entries
    pub fn entry_count(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Snapshot of the stored entries
    pub fn all(&self) -> Vec<Entry> {
        self.entries.read().unwrap().clone()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn create(&self, new_entry: &NewEntry) -> Result<Entry, DomainError> {
        let entry = Entry {
            id: EntryId::new(),
            title: new_entry.title.clone(),
            content: new_entry.content.clone(),
            sentiment: new_entry.sentiment,
            created_at: Utc::now(),
        };

        self.entries.write().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<Entry>, DomainError> {
        Ok(self.all())
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, DomainError> {
        let entries = self.entries.read().unwrap();
        Ok(entries.iter().find(|e| &e.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.entry_count() as u64)
    }
}

// ============================================================================
// Sentiment Analyzers
// ============================================================================

/// Analyzer that returns the same label for any text
pub struct FixedSentimentAnalyzer {
    sentiment: Sentiment,
}

impl FixedSentimentAnalyzer {
    pub fn new(sentiment: Sentiment) -> Self {
        Self { sentiment }
    }
}

impl SentimentAnalyzer for FixedSentimentAnalyzer {
    fn polarity(&self, _text: &str) -> Result<f64, DomainError> {
        Ok(match self.sentiment {
            Sentiment::Positive => 1.0,
            Sentiment::Neutral => 0.0,
            Sentiment::Negative => -1.0,
        })
    }
}

/// Analyzer that always fails
pub struct FailingSentimentAnalyzer;

impl SentimentAnalyzer for FailingSentimentAnalyzer {
    fn polarity(&self, _text: &str) -> Result<f64, DomainError> {
        Err(DomainError::Analysis("analyzer unavailable".to_string()))
    }
}
