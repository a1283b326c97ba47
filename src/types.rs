//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{taxonomy::ErrorCategory, Error};

/// Tokens of one sentence aligned 1:1 with their part-of-speech tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tagging {
    tokens: Vec<String>,
    tags: Vec<String>,
    probabilities: Option<Vec<f64>>,
}

impl Tagging {
    /// Creates a new tagging. Fails if there is not exactly one tag per token.
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self, Error> {
        Tagging::with_probabilities(tokens, tags, None)
    }

    pub fn with_probabilities(
        tokens: Vec<String>,
        tags: Vec<String>,
        probabilities: Option<Vec<f64>>,
    ) -> Result<Self, Error> {
        if tokens.len() != tags.len() {
            return Err(Error::Misaligned {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }

        if let Some(probs) = &probabilities {
            if probs.len() != tokens.len() {
                return Err(Error::MisalignedProbabilities {
                    tokens: tokens.len(),
                    probabilities: probs.len(),
                });
            }
        }

        Ok(Tagging {
            tokens,
            tags,
            probabilities,
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The tagger's confidence in each tag, if the tagger provides it.
    pub fn probabilities(&self) -> Option<&[f64]> {
        self.probabilities.as_deref()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .zip(self.tags.iter())
            .map(|(token, tag)| (token.as_str(), tag.as_str()))
    }
}

/// A sentence with synthesized errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSentence {
    /// The untouched input text.
    pub original_form: String,
    /// The mutated tokens joined by single spaces.
    pub error_form: String,
    /// Maps the index of a token in the input tagging to the error applied to it.
    pub error_positions: BTreeMap<usize, ErrorCategory>,
}

impl ErrorSentence {
    pub fn n_errors(&self) -> usize {
        self.error_positions.len()
    }

    pub fn count_by_category(&self) -> BTreeMap<ErrorCategory, usize> {
        let mut counts = BTreeMap::new();
        for category in self.error_positions.values() {
            *counts.entry(*category).or_insert(0) += 1;
        }
        counts
    }
}
