//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod lexicon;
pub mod sql;

pub use lexicon::LexiconSentimentAnalyzer;
pub use sql::{ensure_schema, SqlEntryRepository};
