//! Entry service
//!
//! Handles entry creation, listing, lookup and first-run seeding.

use std::sync::Arc;

use crate::domain::entities::{Entry, EntryId, NewEntry, Sentiment};
use crate::domain::ports::{EntryRepository, SentimentAnalyzer};
use crate::error::{AppError, DomainError};

/// Longest accepted title, in characters
pub const MAX_TITLE_LEN: usize = 200;

/// Longest accepted content, in characters
pub const MAX_CONTENT_LEN: usize = 10_000;

pub const WELCOME_TITLE: &str = "Welcome Entry";
pub const WELCOME_CONTENT: &str = "This is a dummy entry to ensure the collection is created.";

/// Service for managing journal entries
pub struct EntryService<ER, SA>
where
    ER: EntryRepository,
    SA: SentimentAnalyzer,
{
    entries: Arc<ER>,
    analyzer: Arc<SA>,
}

impl<ER, SA> EntryService<ER, SA>
where
    ER: EntryRepository,
    SA: SentimentAnalyzer,
{
    pub fn new(entries: Arc<ER>, analyzer: Arc<SA>) -> Self {
        Self { entries, analyzer }
    }

    /// Create an entry whose sentiment is computed from its content
    pub async fn create_entry(&self, title: &str, content: &str) -> Result<Entry, AppError> {
        self.create(title, content, None).await
    }

    /// Create an entry, optionally with a caller-supplied sentiment label
    ///
    /// A non-blank label must name a known sentiment and is stored as given,
    /// skipping classification. A missing or blank label falls back to
    /// classifying the content.
    pub async fn create_entry_with_label(
        &self,
        title: &str,
        content: &str,
        label: Option<&str>,
    ) -> Result<Entry, AppError> {
        let sentiment = match label.map(str::trim).filter(|l| !l.is_empty()) {
            Some(label) => Some(label.parse::<Sentiment>().map_err(AppError::BadRequest)?),
            None => None,
        };

        self.create(title, content, sentiment).await
    }

    /// All entries in insertion order
    pub async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        Ok(self.entries.list_all().await?)
    }

    /// Fetch a single entry, failing with NotFound when it does not exist
    pub async fn get_entry(&self, id: &EntryId) -> Result<Entry, AppError> {
        self.entries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(DomainError::NotFound(format!("Entry {}", id))))
    }

    /// Insert the welcome entry if the collection is empty
    ///
    /// Returns the seeded entry, or `None` when entries already exist.
    pub async fn seed_if_empty(&self) -> Result<Option<Entry>, AppError> {
        if self.entries.count().await? > 0 {
            return Ok(None);
        }

        let entry = self
            .entries
            .create(&NewEntry {
                title: WELCOME_TITLE.to_string(),
                content: WELCOME_CONTENT.to_string(),
                sentiment: Sentiment::Neutral,
            })
            .await?;

        tracing::info!(id = %entry.id, "Seeded empty journal with welcome entry");
        Ok(Some(entry))
    }

    async fn create(
        &self,
        title: &str,
        content: &str,
        sentiment: Option<Sentiment>,
    ) -> Result<Entry, AppError> {
        let title = title.trim();
        validate(title, content)?;

        let sentiment = match sentiment {
            Some(sentiment) => sentiment,
            None => self.analyzer.classify(content)?,
        };

        let entry = self
            .entries
            .create(&NewEntry {
                title: title.to_string(),
                content: content.to_string(),
                sentiment,
            })
            .await?;

        tracing::debug!(id = %entry.id, sentiment = %entry.sentiment, "Created entry");
        Ok(entry)
    }
}

fn validate(title: &str, content: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::Validation("Title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::Validation(format!(
            "Title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(DomainError::Validation(format!(
            "Content must be at most {} characters",
            MAX_CONTENT_LEN
        )));
    }
    Ok(())
}
