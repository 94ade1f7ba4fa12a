//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. PostgreSQL in
//! production; tests run the same code against in-memory SQLite.

pub mod entry_repo;
pub mod schema;


pub use entry_repo::SqlEntryRepository;
pub use schema::ensure_schema;
