//! Lexicon sentiment adapter
//!
//! Rule-based implementation of the `SentimentAnalyzer` port.

pub mod analyzer;
mod words;

pub use analyzer::LexiconSentimentAnalyzer;
