//! Capabilities of the linguistic collaborators errors are generated with.
//!
//! Sentence splitting, tokenization, tagging and inflection are not part of error generation itself.
//! The traits here describe what is needed from them; [components][crate::components] has implementations.

use crate::{tables, types::Tagging, Error};

/// Splits a sentence into tokens.
pub trait Tokenize {
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Output of a [Tag]ger: one tag per token and optionally the confidence in each tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tags {
    pub tags: Vec<String>,
    pub probabilities: Option<Vec<f64>>,
}

/// Assigns a part-of-speech tag to each token.
pub trait Tag {
    fn tag(&self, tokens: &[&str]) -> Tags;

    /// Tokenizes and tags a sentence.
    fn tagging<T: Tokenize>(&self, tokenizer: &T, sentence: &str) -> Result<Tagging, Error>
    where
        Self: Sized,
    {
        let tokens = tokenizer.tokenize(sentence);
        let Tags {
            tags,
            probabilities,
        } = self.tag(&tokens);

        Tagging::with_probabilities(
            tokens.into_iter().map(|x| x.to_string()).collect(),
            tags,
            probabilities,
        )
    }
}

/// Produces alternate inflected forms of words.
///
/// Every method returns `None` if no alternate form is known. This is never an error:
/// the word is simply left unchanged.
pub trait Morphology {
    /// The form of opposite grammatical number of a noun, pronoun or determiner tagged with `tag`.
    fn pluralize(&self, word: &str, tag: &str) -> Option<String>;

    /// An ungrammatical form of a verb tagged with `tag`, see [VerbForm::bad_form][tables::VerbForm::bad_form].
    fn change_verb_form(&self, word: &str, tag: &str) -> Option<String>;

    /// The objective form of a subjective pronoun and vice versa.
    fn change_objectivity(&self, pronoun: &str) -> Option<String> {
        tables::change_objectivity(pronoun)
    }

    /// All distinct forms of a verb.
    fn verb_forms(&self, word: &str) -> Vec<String>;
}

impl<'a, T> Morphology for &'a T
where
    T: Morphology,
{
    fn pluralize(&self, word: &str, tag: &str) -> Option<String> {
        (*self).pluralize(word, tag)
    }

    fn change_verb_form(&self, word: &str, tag: &str) -> Option<String> {
        (*self).change_verb_form(word, tag)
    }

    fn change_objectivity(&self, pronoun: &str) -> Option<String> {
        (*self).change_objectivity(pronoun)
    }

    fn verb_forms(&self, word: &str) -> Vec<String> {
        (*self).verb_forms(word)
    }
}
