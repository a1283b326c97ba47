//! Coarse lexical categories of part-of-speech tags.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::iter::FromIterator;

/// A coarse grouping of Penn Treebank tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LexicalCategory {
    Noun,
    Verb,
    Determiner,
    Adjective,
    Adverb,
    Preposition,
    Pronoun,
    Punctuation,
    /// Any tag not in one of the other tables.
    /// Inside an [Applicability] this acts as a wildcard instead, see [Applicability::is_wildcard].
    Other,
}

impl LexicalCategory {
    pub fn all() -> &'static [LexicalCategory] {
        use LexicalCategory::*;

        &[
            Noun,
            Verb,
            Determiner,
            Adjective,
            Adverb,
            Preposition,
            Pronoun,
            Punctuation,
            Other,
        ]
    }

    fn tags(&self) -> &'static [&'static str] {
        use LexicalCategory::*;

        match self {
            Noun => &["NN", "NNS", "NNP", "NNPS"],
            Verb => &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "MD"],
            Determiner => &["DT", "WDT", "PDT"],
            Adjective => &["JJ", "JJR", "JJS"],
            Adverb => &["RB", "RBR", "RBS", "WRB"],
            Preposition => &["IN", "TO"],
            Pronoun => &["PRP", "PRP$", "WP", "WP$"],
            // punctuation has its own group, so it is never `Other` and only a wildcard
            // or an explicit `Punctuation` entry applies to it
            Punctuation => &[
                ".", ",", ":", ";", "``", "''", "\"", "(", ")", "-LRB-", "-RRB-", "#", "$", "HYPH",
                "NFP",
            ],
            Other => &[],
        }
    }
}

lazy_static! {
    static ref TAG_TABLE: HashMap<&'static str, LexicalCategory> = LexicalCategory::all()
        .iter()
        .flat_map(|category| category.tags().iter().map(move |tag| (*tag, *category)))
        .collect();
}

/// Maps a part-of-speech tag to its [LexicalCategory]. The lookup is case-insensitive,
/// tags which are not known are classified as [LexicalCategory::Other].
pub fn classify(tag: &str) -> LexicalCategory {
    TAG_TABLE
        .get(tag.to_uppercase().as_str())
        .copied()
        .unwrap_or(LexicalCategory::Other)
}

/// The set of lexical categories an error category can be applied to.
///
/// Containing [LexicalCategory::Other] makes the set a wildcard: it then matches every token
/// regardless of its tag, including tokens whose tag is in a literal table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Applicability(IndexSet<LexicalCategory>);

impl Applicability {
    pub fn new<I: IntoIterator<Item = LexicalCategory>>(categories: I) -> Self {
        Applicability(categories.into_iter().collect())
    }

    /// Applicable to every lexical category.
    pub fn any() -> Self {
        Applicability::new(LexicalCategory::all().iter().copied())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.contains(&LexicalCategory::Other)
    }

    /// Whether a token classified as `category` can be picked.
    pub fn matches(&self, category: LexicalCategory) -> bool {
        self.is_wildcard() || self.0.contains(&category)
    }

    /// Whether any of the given categories can be picked. Always true for a wildcard.
    pub fn intersects<'a, I>(&self, categories: I) -> bool
    where
        I: IntoIterator<Item = &'a LexicalCategory>,
    {
        self.is_wildcard() || categories.into_iter().any(|x| self.0.contains(x))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexicalCategory> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LexicalCategory> for Applicability {
    fn from_iter<I: IntoIterator<Item = LexicalCategory>>(iter: I) -> Self {
        Applicability::new(iter)
    }
}
