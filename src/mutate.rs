//! Operators applying one kind of error to a token of a sentence.
//!
//! Each [ErrorCategory][crate::taxonomy::ErrorCategory] has exactly one operator, see
//! [ErrorCategory::mutation][crate::taxonomy::ErrorCategory::mutation].

use enum_dispatch::enum_dispatch;
use rand::{Rng, RngCore};

use crate::{
    properties::Morphology,
    tracker::CandidateTracker,
    utils::toggle_first_case,
};

/// Everything an operator may read or change.
pub struct MutationContext<'a> {
    pub tracker: &'a mut CandidateTracker,
    pub rng: &'a mut dyn RngCore,
    pub morphology: &'a dyn Morphology,
}

#[enum_dispatch]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Insertion,
    Omission,
    Displacement,
    Number,
    Tense,
    Objectivity,
    Case,
}

#[enum_dispatch(Mutation)]
pub trait Mutate {
    /// Applies the error to the unused token at `position`.
    /// Returns whether the sentence text visibly changed. If it did, the token is marked as used.
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool;
}

/// Replaces the token at `position` by the output of `func` if that is a different, non-empty word.
/// With `ignore_case`, a word which only differs in case does not count as different.
fn replace_token<F>(
    ctx: &mut MutationContext<'_>,
    position: usize,
    ignore_case: bool,
    func: F,
) -> bool
where
    F: FnOnce(&dyn Morphology, &str, &str) -> Option<String>,
{
    let id = ctx.tracker.id_at(position);
    let token = ctx.tracker.get(id);

    let differs = |changed: &str| {
        if ignore_case {
            !changed.eq_ignore_ascii_case(&token.token)
        } else {
            changed != token.token
        }
    };

    match func(ctx.morphology, &token.token, &token.tag) {
        Some(changed) if !changed.is_empty() && differs(&changed) => {
            let token = ctx.tracker.get_mut(id);
            token.token = changed;
            ctx.tracker.mark_used(id);
            true
        }
        _ => false,
    }
}

/// Duplicates the token at a random position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insertion;

impl Mutate for Insertion {
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool {
        let id = ctx.tracker.id_at(position);
        let copy = ctx.tracker.get(id).duplicate();

        let target = ctx.rng.gen_range(0..ctx.tracker.len());
        ctx.tracker.insert(target, copy);
        ctx.tracker.mark_used(id);
        true
    }
}

/// Removes the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Omission;

impl Mutate for Omission {
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool {
        let id = ctx.tracker.remove(position);
        ctx.tracker.mark_used(id);
        true
    }
}

/// Swaps the token with its right or left neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displacement;

impl Mutate for Displacement {
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool {
        let right = ctx.rng.gen_bool(0.5);
        let other = if right && position + 1 < ctx.tracker.len() {
            position + 1
        } else if position > 0 {
            position - 1
        } else {
            position
        };

        let changed = ctx.tracker.token_at(position).token != ctx.tracker.token_at(other).token;
        ctx.tracker.swap(position, other);

        if changed {
            let id = ctx.tracker.id_at(other);
            ctx.tracker.mark_used(id);
        }
        changed
    }
}

/// Changes grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Number;

impl Mutate for Number {
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool {
        replace_token(ctx, position, true, |morphology, word, tag| {
            morphology.pluralize(word, tag)
        })
    }
}

/// Puts a verb in the wrong form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tense;

impl Mutate for Tense {
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool {
        replace_token(ctx, position, false, |morphology, word, tag| {
            morphology.change_verb_form(word, tag)
        })
    }
}

/// Swaps subjective and objective pronoun forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Objectivity;

impl Mutate for Objectivity {
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool {
        replace_token(ctx, position, false, |morphology, word, _| {
            morphology.change_objectivity(word)
        })
    }
}

/// Toggles the case of the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Case;

impl Mutate for Case {
    fn apply(&self, ctx: &mut MutationContext<'_>, position: usize) -> bool {
        replace_token(ctx, position, false, |_, word, _| toggle_first_case(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tagging;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Knows exactly one plural and one verb form.
    struct Stub;

    impl Morphology for Stub {
        fn pluralize(&self, word: &str, _tag: &str) -> Option<String> {
            match word {
                "dog" => Some("dogs".into()),
                "sheep" => Some("sheep".into()),
                "fish" => Some("Fish".into()),
                _ => None,
            }
        }

        fn change_verb_form(&self, word: &str, _tag: &str) -> Option<String> {
            if word == "runs" {
                Some("running".into())
            } else {
                None
            }
        }

        fn verb_forms(&self, _word: &str) -> Vec<String> {
            Vec::new()
        }
    }

    fn tracker(tokens: &[(&str, &str)]) -> CandidateTracker {
        let tagging = Tagging::new(
            tokens.iter().map(|x| x.0.to_string()).collect(),
            tokens.iter().map(|x| x.1.to_string()).collect(),
        )
        .unwrap();
        CandidateTracker::new(&tagging)
    }

    fn apply(mutation: Mutation, tracker: &mut CandidateTracker, position: usize, seed: u64) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ctx = MutationContext {
            tracker,
            rng: &mut rng,
            morphology: &Stub,
        };
        mutation.apply(&mut ctx, position)
    }

    fn sentence() -> CandidateTracker {
        tracker(&[("The", "DT"), ("dog", "NN"), ("runs", "VBZ"), (".", ".")])
    }

    #[test]
    fn insertion_duplicates_token() {
        for seed in 0..10 {
            let mut tracker = sentence();
            let id = tracker.id_at(1);

            assert!(apply(Insertion.into(), &mut tracker, 1, seed));
            assert_eq!(tracker.len(), 5);
            assert_eq!(tracker.tokens().filter(|x| x.token == "dog").count(), 2);
            assert!(tracker.tokens().filter(|x| x.token == "dog").all(|x| x.is_used()));
            assert!(tracker.get(id).is_used());
        }
    }

    #[test]
    fn omission_removes_token() {
        let mut tracker = sentence();

        assert!(apply(Omission.into(), &mut tracker, 2, 0));
        assert_eq!(tracker.render(), "The dog .");
    }

    #[test]
    fn displacement_with_identical_neighbor_is_invisible() {
        let mut tracker = tracker(&[("a", "DT"), ("a", "DT")]);

        assert!(!apply(Displacement.into(), &mut tracker, 0, 0));
        assert!(!tracker.token_at(0).is_used());
        assert!(!tracker.token_at(1).is_used());
    }

    #[test]
    fn displacement_of_single_token_is_invisible() {
        let mut tracker = tracker(&[("!", ".")]);

        assert!(!apply(Displacement.into(), &mut tracker, 0, 3));
    }

    #[test]
    fn displacement_swaps_with_a_neighbor() {
        for seed in 0..10 {
            let mut tracker = sentence();

            assert!(apply(Displacement.into(), &mut tracker, 1, seed));
            let rendered = tracker.render();
            assert!(rendered == "dog The runs ." || rendered == "The runs dog .");
        }
    }

    #[test]
    fn lexical_mutations_use_morphology() {
        let mut tracker = sentence();

        assert!(apply(Number.into(), &mut tracker, 1, 0));
        assert!(apply(Tense.into(), &mut tracker, 2, 0));
        assert_eq!(tracker.render(), "The dogs running .");
        assert!(tracker.token_at(1).is_used());
        assert!(tracker.token_at(2).is_used());
    }

    #[test]
    fn unchanged_forms_are_not_reported() {
        let mut tracker = tracker(&[
            ("sheep", "NNS"),
            ("it", "PRP"),
            ("cat", "NN"),
            ("fish", "NN"),
        ]);

        assert!(!apply(Number.into(), &mut tracker, 0, 0));
        assert!(!apply(Number.into(), &mut tracker, 3, 0));
        assert_eq!(tracker.token_at(3).token, "fish");
        assert!(!apply(Number.into(), &mut tracker, 2, 0));
        assert!(!apply(Objectivity.into(), &mut tracker, 1, 0));
        assert!(!tracker.token_at(0).is_used());
    }

    #[test]
    fn objectivity_uses_pronoun_table() {
        let mut tracker = tracker(&[("She", "PRP"), ("left", "VBD")]);

        assert!(apply(Objectivity.into(), &mut tracker, 0, 0));
        assert_eq!(tracker.render(), "Her left");
    }

    #[test]
    fn case_twice_restores_token() {
        let mut first = sentence();

        assert!(apply(Case.into(), &mut first, 0, 0));
        assert_eq!(first.token_at(0).token, "the");

        let mut again = tracker(&[("the", "NN")]);
        assert!(apply(Case.into(), &mut again, 0, 0));
        assert_eq!(again.token_at(0).token, "The");

        let mut punctuation = sentence();
        assert!(!apply(Case.into(), &mut punctuation, 3, 0));
    }
}
