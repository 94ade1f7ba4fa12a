//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod sentiment;

pub use repositories::EntryRepository;
pub use sentiment::SentimentAnalyzer;
