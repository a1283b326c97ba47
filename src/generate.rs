//! Injection of errors into sentences.
//!
//! Per sentence, the [Generator] repeatedly
//! 1. draws an [ErrorCategory] which is applicable to one of the unused tokens,
//! 2. draws one of the unused tokens matching that category,
//! 3. applies the category's [Mutation][crate::mutate::Mutation] to that token.
//!
//! Each draw is one *slot* of the error budget. A slot where no category could be drawn is spent without effect.
//! A mutation without visible effect (e.g. swapping two identical words) does not count against the budget,
//! but the token is marked as used so it is not drawn again.

use log::{debug, error, info, trace};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::{
    mutate::{Mutate, MutationContext},
    pos::LexicalCategory,
    properties::{Morphology, Tag, Tokenize},
    select::{pick_token, select_category, unused_categories},
    taxonomy::{ErrorCategory, Taxonomy},
    tracker::CandidateTracker,
    types::{ErrorSentence, Tagging},
    Error,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Options to configure error generation.
pub struct GenerateOptions {
    /// How many errors to inject into each sentence.
    pub errors_per_sentence: usize,
    /// Whether to drop sentences where fewer than `errors_per_sentence` errors could be injected.
    pub exact_count_only: bool,
    /// Seed of the random number generator. Each sentence gets its own stream, see [sentence_rng].
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            errors_per_sentence: 1,
            exact_count_only: false,
            seed: 0,
        }
    }
}

/// The random number generator for the sentence at `index` of a batch.
///
/// Streams only depend on the seed and the index, so the result of a batch does not depend on the
/// order in which sentences are processed.
pub fn sentence_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// The result of injecting errors into one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Number of slots drawn, including refunded ones.
    pub attempts: usize,
    /// Number of slots where the mutation had no visible effect.
    pub refunds: usize,
    /// The sentence with errors. `None` if no error was injected or, with
    /// [exact_count_only][GenerateOptions::exact_count_only], if too few errors were injected.
    pub sentence: Option<ErrorSentence>,
}

enum Slot {
    Recorded {
        index: usize,
        category: ErrorCategory,
    },
    Refunded,
    Spent,
}

/// Injects errors into sentences.
pub struct Generator<'a, M: Morphology> {
    taxonomy: &'a Taxonomy,
    morphology: &'a M,
    options: GenerateOptions,
}

impl<'a, M: Morphology> Generator<'a, M> {
    pub fn new(taxonomy: &'a Taxonomy, morphology: &'a M, options: GenerateOptions) -> Self {
        Generator {
            taxonomy,
            morphology,
            options,
        }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        self.taxonomy
    }

    fn fill_slot<R: RngCore>(
        &self,
        tracker: &mut CandidateTracker,
        present: &HashSet<LexicalCategory>,
        rng: &mut R,
    ) -> Result<Slot, Error> {
        let category = match select_category(self.taxonomy, present, rng) {
            Some(category) => category,
            None => return Ok(Slot::Spent),
        };

        let position = self
            .taxonomy
            .settings(category)
            .and_then(|settings| pick_token(settings, tracker, rng))
            .ok_or(Error::Inconsistent { category })?;

        let id = tracker.id_at(position);
        let index = tracker.get(id).original_index();

        let mut ctx = MutationContext {
            tracker: &mut *tracker,
            rng: &mut *rng,
            morphology: self.morphology,
        };

        if category.mutation().apply(&mut ctx, position) {
            trace!("applied {} to token {}", category, index);
            Ok(Slot::Recorded { index, category })
        } else {
            trace!("{} has no effect on token {}, refunding", category, index);
            tracker.mark_used(id);
            Ok(Slot::Refunded)
        }
    }

    /// Injects errors into one tagged sentence. `original` is the untouched text of the sentence.
    ///
    /// Fails with [Error::Inconsistent] if a category was drawn as applicable but no token matches it.
    pub fn inject<R: RngCore>(
        &self,
        tagging: &Tagging,
        original: &str,
        rng: &mut R,
    ) -> Result<Outcome, Error> {
        let mut tracker = CandidateTracker::new(tagging);
        let mut errors = BTreeMap::new();
        let mut remaining = self.options.errors_per_sentence;
        let mut attempts = 0;
        let mut refunds = 0;

        while remaining > 0 {
            let present = unused_categories(&tracker);
            if present.is_empty() {
                trace!("all tokens used with {} slots remaining", remaining);
                break;
            }

            attempts += 1;
            match self.fill_slot(&mut tracker, &present, rng)? {
                Slot::Recorded { index, category } => {
                    errors.insert(index, category);
                    remaining -= 1;
                }
                Slot::Refunded => refunds += 1,
                Slot::Spent => remaining -= 1,
            }
        }

        let accepted = !errors.is_empty()
            && (!self.options.exact_count_only
                || errors.len() == self.options.errors_per_sentence);

        let sentence = if accepted {
            Some(ErrorSentence {
                original_form: original.to_string(),
                error_form: tracker.render(),
                error_positions: errors,
            })
        } else {
            debug!(
                "dropping {:?}: {} of {} errors injected",
                original,
                errors.len(),
                self.options.errors_per_sentence
            );
            None
        };

        Ok(Outcome {
            attempts,
            refunds,
            sentence,
        })
    }

    fn generate_one<T: Tokenize, G: Tag>(
        &self,
        index: usize,
        sentence: &str,
        tokenizer: &T,
        tagger: &G,
    ) -> Option<ErrorSentence> {
        let result = tagger
            .tagging(tokenizer, sentence)
            .and_then(|tagging| {
                let mut rng = sentence_rng(self.options.seed, index);
                self.inject(&tagging, sentence, &mut rng)
            });

        match result {
            Ok(outcome) => outcome.sentence,
            Err(err) => {
                error!("skipping sentence {} ({:?}): {}", index, sentence, err);
                None
            }
        }
    }

    /// Tokenizes, tags and injects errors into each sentence.
    ///
    /// Sentences which end up without errors are not part of the output, so the output can be shorter than the input.
    pub fn generate<S, T, G>(&self, sentences: &[S], tokenizer: &T, tagger: &G) -> Vec<ErrorSentence>
    where
        S: AsRef<str>,
        T: Tokenize,
        G: Tag,
    {
        let output: Vec<_> = sentences
            .iter()
            .enumerate()
            .filter_map(|(i, sentence)| self.generate_one(i, sentence.as_ref(), tokenizer, tagger))
            .collect();

        info!("generated {} of {} sentences", output.len(), sentences.len());
        output
    }

    /// Same as [generate][Generator::generate], but processes sentences in parallel.
    /// The output is identical to the sequential version.
    pub fn generate_par<S, T, G>(
        &self,
        sentences: &[S],
        tokenizer: &T,
        tagger: &G,
    ) -> Vec<ErrorSentence>
    where
        S: AsRef<str> + Sync,
        T: Tokenize + Sync,
        G: Tag + Sync,
        M: Sync,
    {
        let output: Vec<_> = sentences
            .par_iter()
            .enumerate()
            .filter_map(|(i, sentence)| self.generate_one(i, sentence.as_ref(), tokenizer, tagger))
            .collect();

        info!("generated {} of {} sentences", output.len(), sentences.len());
        output
    }
}
