//! A simple tokenizer splitting on whitespace and punctuation.

use crate::{properties::Tokenize, utils::splitting_chars};

/// Split a text at the points where the given function is true.
/// Keeps the separators. See https://stackoverflow.com/a/40296745.
fn split<F>(text: &str, split_func: F) -> Vec<&str>
where
    F: Fn(char) -> bool,
{
    let mut result = Vec::new();
    let mut last = 0;
    for (index, matched) in text.match_indices(split_func) {
        if last != index {
            result.push(&text[last..index]);
        }
        result.push(matched);
        last = index + matched.len();
    }
    if last < text.len() {
        result.push(&text[last..]);
    }

    result
}

/// Splits text into words and punctuation. Whitespace is dropped.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    /// Extra characters to split text on in addition to whitespace and common punctuation.
    pub extra_split_chars: Vec<char>,
}

impl Tokenize for WordTokenizer {
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        split(text, |c: char| {
            c.is_whitespace()
                || splitting_chars().contains(c)
                || self.extra_split_chars.contains(&c)
        })
        .into_iter()
        .filter(|token| !token.trim().is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        let tokenizer = WordTokenizer::default();

        assert_eq!(
            tokenizer.tokenize("She saw him, twice."),
            vec!["She", "saw", "him", ",", "twice", "."]
        );
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn extra_split_chars_are_used() {
        let tokenizer = WordTokenizer {
            extra_split_chars: vec!['-'],
        };

        assert_eq!(
            tokenizer.tokenize("well-known"),
            vec!["well", "-", "known"]
        );
    }
}
