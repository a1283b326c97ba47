//! Synthesizes grammatically incorrect variants of part-of-speech tagged sentences.
//! # Overview
//!
//! errgen has the following core abstractions:
//! - A [Taxonomy][taxonomy::Taxonomy] of [ErrorCategory][taxonomy::ErrorCategory]s, each with a weight and
//!   a set of [LexicalCategory][pos::LexicalCategory]s it applies to.
//! - A [Generator][generate::Generator] which injects a configured number of errors into each sentence by
//!   weighted random selection of a category, uniform selection of a matching token and a category-specific mutation.
//! - Capability traits for the linguistic collaborators in [properties]: a [Tokenize][properties::Tokenize]r,
//!   a [Tag]ger and a [Morphology][properties::Morphology] provider. A dictionary-backed
//!   [Lexicon][components::lexicon::Lexicon] implements the latter two.
//!
//! # Examples
//!
//! Inject one error into a tagged sentence:
//!
//! ```
//! use errgen::{generate::{Generator, GenerateOptions}, taxonomy::Taxonomy, types::Tagging};
//! use errgen::components::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::default();
//! let taxonomy = Taxonomy::default();
//! let generator = Generator::new(&taxonomy, &lexicon, GenerateOptions::default());
//!
//! let tagging = Tagging::new(
//!     vec!["Dogs".into(), "bark".into(), ".".into()],
//!     vec!["NNS".into(), "VBP".into(), ".".into()],
//! )?;
//!
//! let mut rng = errgen::generate::sentence_rng(42, 0);
//! let outcome = generator.inject(&tagging, "Dogs bark.", &mut rng)?;
//!
//! if let Some(sentence) = outcome.sentence {
//!     assert_eq!(sentence.error_positions.len(), 1);
//! }
//! # Ok::<(), errgen::Error>(())
//! ```

// #![warn(missing_docs)]
use std::io;

use thiserror::Error;

pub mod components;
pub mod generate;
pub mod mutate;
pub mod pos;
pub mod properties;
pub mod select;
pub mod tables;
pub mod taxonomy;
pub mod tracker;
pub mod types;
pub(crate) mod utils;

pub use properties::Tag;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured during deserialization or during serialization.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("tagging is misaligned: {tokens} tokens but {tags} tags.")]
    Misaligned { tokens: usize, tags: usize },
    #[error("tagging is misaligned: {tokens} tokens but {probabilities} tag probabilities.")]
    MisalignedProbabilities { tokens: usize, probabilities: usize },
    #[error("no unused token matches {category:?} although it was selected as applicable.")]
    Inconsistent { category: taxonomy::ErrorCategory },
}
