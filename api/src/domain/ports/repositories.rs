//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL via SeaORM).

use async_trait::async_trait;

use crate::domain::entities::{Entry, EntryId, NewEntry};
use crate::error::DomainError;

/// Repository for journal entries stored in the `entries` collection
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Insert a new entry; the store assigns its ID and creation time
    async fn create(&self, entry: &NewEntry) -> Result<Entry, DomainError>;

    /// All stored entries in insertion order
    async fn list_all(&self) -> Result<Vec<Entry>, DomainError>;

    /// Find an entry by ID
    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, DomainError>;

    /// Number of stored entries
    async fn count(&self) -> Result<u64, DomainError>;
}
