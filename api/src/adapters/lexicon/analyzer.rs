//! Lexicon-based sentiment analyzer
//!
//! Scores text by looking words up in a polarity lexicon:
//! 1. Split lowercase text into word tokens
//! 2. Score each lexicon word, scaled by a preceding intensifier
//! 3. Flip and dampen the score when a negation precedes it
//! 4. Average the scored words and clamp to [-1, 1]
//!
//! Negations and intensifiers reach the next content word, skipping short
//! function words ("not a happy person").

use std::collections::{HashMap, HashSet};

use regex::Regex;

use super::words::{FILLERS, INTENSIFIERS, NEGATIONS, NEGATIVE, POSITIVE};
use crate::domain::ports::SentimentAnalyzer;
use crate::error::DomainError;

/// Multiplier applied to a negated word's score
const NEGATION_FACTOR: f64 = -0.5;

pub struct LexiconSentimentAnalyzer {
    words: HashMap<String, f64>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
    fillers: HashSet<String>,
    tokenizer: Regex,
}

impl LexiconSentimentAnalyzer {
    /// Create an analyzer with the default English word lists
    pub fn new() -> Result<Self, DomainError> {
        let tokenizer = Regex::new(r"[a-z]+(?:'[a-z]+)*")
            .map_err(|e| DomainError::Internal(format!("Invalid tokenizer pattern: {}", e)))?;

        let words = POSITIVE
            .iter()
            .chain(NEGATIVE.iter())
            .map(|(word, score)| (word.to_string(), *score))
            .collect();
        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(word, mult)| (word.to_string(), *mult))
            .collect();
        let fillers = FILLERS.iter().map(|w| w.to_string()).collect();

        Ok(Self {
            words,
            negations,
            intensifiers,
            fillers,
            tokenizer,
        })
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let normalized = text.to_lowercase().replace('\u{2019}', "'");
        self.tokenizer
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn scores(&self, text: &str) -> Vec<f64> {
        let mut scores = Vec::new();
        let mut negate = false;
        let mut multiplier: f64 = 1.0;

        for token in self.tokens(text) {
            if self.negations.contains(&token) {
                negate = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(&token) {
                multiplier *= *mult;
                continue;
            }

            if token.len() <= 1 || self.fillers.contains(&token) {
                continue;
            }

            if let Some(score) = self.words.get(&token) {
                let mut score = *score * multiplier;
                if negate {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score);
            }

            // Modifiers only reach the next content word
            negate = false;
            multiplier = 1.0;
        }

        scores
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn polarity(&self, text: &str) -> Result<f64, DomainError> {
        let scores = self.scores(text);
        if scores.is_empty() {
            return Ok(0.0);
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}
