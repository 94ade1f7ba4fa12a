//! Sentiment analysis port
//!
//! Scores free text on a continuous polarity scale. The label derived from
//! the score is fixed by `Sentiment::from_polarity`, so every analyzer agrees
//! on where the Positive/Neutral/Negative boundaries lie.

use crate::domain::entities::Sentiment;
use crate::error::DomainError;

pub trait SentimentAnalyzer: Send + Sync {
    /// Polarity of `text` in [-1.0, 1.0]
    fn polarity(&self, text: &str) -> Result<f64, DomainError>;

    /// Classify `text` into a discrete sentiment label
    fn classify(&self, text: &str) -> Result<Sentiment, DomainError> {
        let polarity = self.polarity(text)?;
        if polarity.is_nan() {
            return Err(DomainError::Analysis(
                "analyzer produced a NaN polarity".to_string(),
            ));
        }
        Ok(Sentiment::from_polarity(polarity))
    }
}
