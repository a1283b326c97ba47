//! The closed set of error categories and their configurable weights and applicability.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::{
    mutate::{self, Mutation},
    pos::{Applicability, LexicalCategory},
};

/// A kind of grammatical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// A token is duplicated at a random position.
    Insertion,
    /// A token is removed.
    Omission,
    /// A token is swapped with a neighbor.
    Displacement,
    /// Grammatical number of a noun, determiner or pronoun is changed.
    Number,
    /// A verb is put in a wrong form.
    Tense,
    /// A subjective pronoun becomes objective or vice versa.
    Objectivity,
    /// The case of the first character is toggled.
    Case,
}

impl ErrorCategory {
    pub fn all() -> &'static [ErrorCategory] {
        use ErrorCategory::*;

        &[
            Insertion,
            Omission,
            Displacement,
            Number,
            Tense,
            Objectivity,
            Case,
        ]
    }

    /// The operator which applies this kind of error to a sentence.
    pub fn mutation(&self) -> Mutation {
        match self {
            ErrorCategory::Insertion => mutate::Insertion.into(),
            ErrorCategory::Omission => mutate::Omission.into(),
            ErrorCategory::Displacement => mutate::Displacement.into(),
            ErrorCategory::Number => mutate::Number.into(),
            ErrorCategory::Tense => mutate::Tense.into(),
            ErrorCategory::Objectivity => mutate::Objectivity.into(),
            ErrorCategory::Case => mutate::Case.into(),
        }
    }

    /// The lexical categories this kind of error applies to if not configured otherwise.
    pub fn default_applicability(&self) -> Applicability {
        use LexicalCategory::*;

        match self {
            ErrorCategory::Insertion | ErrorCategory::Omission | ErrorCategory::Displacement => {
                Applicability::any()
            }
            ErrorCategory::Number => Applicability::new(vec![Noun, Determiner, Pronoun]),
            ErrorCategory::Tense => Applicability::new(vec![Verb]),
            ErrorCategory::Objectivity => Applicability::new(vec![Pronoun]),
            ErrorCategory::Case => Applicability::new(vec![Noun]),
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Insertion => "insertion",
            ErrorCategory::Omission => "omission",
            ErrorCategory::Displacement => "displacement",
            ErrorCategory::Number => "number",
            ErrorCategory::Tense => "tense",
            ErrorCategory::Objectivity => "objectivity",
            ErrorCategory::Case => "case",
        };
        write!(f, "{}", name)
    }
}

/// Weight and applicability of one [ErrorCategory].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySettings {
    /// Relative weight in the random selection. A weight of zero is never selected.
    #[serde(default = "default_weight")]
    pub weight: u32,
    /// The lexical categories of tokens this error can be applied to.
    pub applicable: Applicability,
}

fn default_weight() -> u32 {
    1
}

impl CategorySettings {
    pub fn new(weight: u32, applicable: Applicability) -> Self {
        CategorySettings { weight, applicable }
    }

    pub fn default_for(category: ErrorCategory) -> Self {
        CategorySettings::new(default_weight(), category.default_applicability())
    }
}

/// The enabled error categories in configuration order.
///
/// The order matters: categories of equal weight are tried in this order during selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    categories: IndexMap<ErrorCategory, CategorySettings>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        ErrorCategory::all()
            .iter()
            .fold(Taxonomy::empty(), |taxonomy, category| {
                taxonomy.with(*category, CategorySettings::default_for(*category))
            })
    }
}

impl Taxonomy {
    /// A taxonomy with no enabled categories.
    pub fn empty() -> Self {
        Taxonomy {
            categories: IndexMap::new(),
        }
    }

    /// Enables `category` with the given settings. Re-enabling keeps the original position.
    pub fn with(mut self, category: ErrorCategory, settings: CategorySettings) -> Self {
        self.categories.insert(category, settings);
        self
    }

    pub fn settings(&self, category: ErrorCategory) -> Option<&CategorySettings> {
        self.categories.get(&category)
    }

    /// Sets the weight of `category`, enabling it with default applicability if needed.
    pub fn set_weight(&mut self, category: ErrorCategory, weight: u32) {
        self.categories
            .entry(category)
            .or_insert_with(|| CategorySettings::default_for(category))
            .weight = weight;
    }

    /// Sets the applicable lexical categories of `category`, enabling it with default weight if needed.
    pub fn set_applicable(&mut self, category: ErrorCategory, applicable: Applicability) {
        self.categories
            .entry(category)
            .or_insert_with(|| CategorySettings::default_for(category))
            .applicable = applicable;
    }

    pub fn disable(&mut self, category: ErrorCategory) -> Option<CategorySettings> {
        self.categories.shift_remove(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ErrorCategory, &CategorySettings)> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Reads a taxonomy from JSON e.g. `{"DISPLACEMENT": {"weight": 2, "applicable": ["OTHER"]}}`.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A [Taxonomy] shared between batches.
///
/// Generation always runs on a [snapshot][SharedTaxonomy::snapshot], so reconfiguring while a batch runs
/// only affects batches started afterwards.
#[derive(Debug, Clone, Default)]
pub struct SharedTaxonomy {
    inner: Arc<RwLock<Taxonomy>>,
}

impl SharedTaxonomy {
    pub fn new(taxonomy: Taxonomy) -> Self {
        SharedTaxonomy {
            inner: Arc::new(RwLock::new(taxonomy)),
        }
    }

    pub fn snapshot(&self) -> Taxonomy {
        self.inner.read().clone()
    }

    pub fn update<F, T>(&self, func: F) -> T
    where
        F: FnOnce(&mut Taxonomy) -> T,
    {
        func(&mut self.inner.write())
    }
}
