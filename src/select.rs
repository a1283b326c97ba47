//! Weighted random choice of an error category and uniform choice of a token to apply it to.

use log::trace;
use rand::{Rng, RngCore};
use std::collections::HashSet;

use crate::{
    pos::LexicalCategory,
    taxonomy::{CategorySettings, ErrorCategory, Taxonomy},
    tracker::CandidateTracker,
};

/// The lexical categories of all tokens which have not been used yet.
pub fn unused_categories(tracker: &CandidateTracker) -> HashSet<LexicalCategory> {
    tracker
        .unused()
        .map(|(_, token)| token.category())
        .collect()
}

/// Applicable categories sorted by ascending weight, ties in taxonomy order.
pub fn applicable_categories<'a>(
    taxonomy: &'a Taxonomy,
    present: &HashSet<LexicalCategory>,
) -> Vec<(ErrorCategory, &'a CategorySettings)> {
    let mut applicable: Vec<_> = taxonomy
        .iter()
        .filter(|(_, settings)| settings.applicable.intersects(present))
        .map(|(category, settings)| (*category, settings))
        .collect();

    // `sort_by_key` is stable
    applicable.sort_by_key(|(_, settings)| settings.weight);
    applicable
}

/// Draws an error category with probability proportional to its weight among the categories which are applicable
/// to at least one of the `present` lexical categories. Categories with a wildcard applicability are always applicable.
///
/// Returns `None` if the applicable weights sum to zero.
pub fn select_category(
    taxonomy: &Taxonomy,
    present: &HashSet<LexicalCategory>,
    rng: &mut dyn RngCore,
) -> Option<ErrorCategory> {
    let applicable = applicable_categories(taxonomy, present);
    let total_weight: u64 = applicable.iter().map(|(_, x)| x.weight as u64).sum();

    if total_weight == 0 {
        trace!("no applicable category has a positive weight");
        return None;
    }

    let mut r: f64 = rng.gen();
    for (category, settings) in applicable {
        let frac = settings.weight as f64 / total_weight as f64;
        if r < frac {
            return Some(category);
        }
        r -= frac;
    }

    None
}

/// Draws the position of an unused token the error described by `settings` can be applied to.
pub fn pick_token(
    settings: &CategorySettings,
    tracker: &CandidateTracker,
    rng: &mut dyn RngCore,
) -> Option<usize> {
    let candidates: Vec<usize> = tracker
        .unused()
        .filter(|(_, token)| settings.applicable.matches(token.category()))
        .map(|(i, _)| i)
        .collect();

    if candidates.is_empty() {
        return None;
    }

    Some(candidates[rng.gen_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos::Applicability, types::Tagging};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// An rng which always returns the same float.
    struct Fixed(u64);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::rngs::mock::StepRng::new(self.0, 0).fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Makes `rng.gen::<f64>()` return approximately `value`.
    fn fixed(value: f64) -> Fixed {
        Fixed(((value * (1u64 << 53) as f64) as u64) << 11)
    }

    fn present(categories: &[LexicalCategory]) -> HashSet<LexicalCategory> {
        categories.iter().copied().collect()
    }

    fn taxonomy() -> Taxonomy {
        Taxonomy::empty()
            .with(
                ErrorCategory::Case,
                CategorySettings::new(3, Applicability::new(vec![LexicalCategory::Noun])),
            )
            .with(
                ErrorCategory::Tense,
                CategorySettings::new(1, Applicability::new(vec![LexicalCategory::Verb])),
            )
            .with(
                ErrorCategory::Omission,
                CategorySettings::new(1, Applicability::any()),
            )
    }

    #[test]
    fn applicable_categories_are_sorted_stably() {
        let taxonomy = taxonomy();
        let present = present(&[LexicalCategory::Noun, LexicalCategory::Verb]);

        let order: Vec<_> = applicable_categories(&taxonomy, &present)
            .into_iter()
            .map(|(category, _)| category)
            .collect();

        assert_eq!(
            order,
            vec![
                ErrorCategory::Tense,
                ErrorCategory::Omission,
                ErrorCategory::Case
            ]
        );
    }

    #[test]
    fn draw_walks_cumulative_weights() {
        let taxonomy = taxonomy();
        let present = present(&[LexicalCategory::Noun, LexicalCategory::Verb]);

        // weights 1/5, 1/5, 3/5 in the order tense, omission, case
        let cases = [
            (0.1, ErrorCategory::Tense),
            (0.3, ErrorCategory::Omission),
            (0.5, ErrorCategory::Case),
            (0.99, ErrorCategory::Case),
        ];

        for (r, expected) in cases.iter() {
            assert_eq!(
                select_category(&taxonomy, &present, &mut fixed(*r)),
                Some(*expected)
            );
        }
    }

    #[test]
    fn inapplicable_categories_are_skipped() {
        let taxonomy = taxonomy();
        let present = present(&[LexicalCategory::Punctuation]);

        for _ in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            assert_eq!(
                select_category(&taxonomy, &present, &mut rng),
                Some(ErrorCategory::Omission)
            );
        }
    }

    #[test]
    fn zero_weight_selects_nothing() {
        let mut taxonomy = taxonomy();
        taxonomy.set_weight(ErrorCategory::Omission, 0);
        let present = present(&[LexicalCategory::Adjective]);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(select_category(&taxonomy, &present, &mut rng), None);
    }

    #[test]
    fn picker_respects_applicability_and_usage() {
        let tagging = Tagging::new(
            vec!["The".into(), "dog".into(), "runs".into()],
            vec!["DT".into(), "NN".into(), "VBZ".into()],
        )
        .unwrap();
        let mut tracker = CandidateTracker::new(&tagging);
        let nouns = CategorySettings::new(1, Applicability::new(vec![LexicalCategory::Noun]));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(pick_token(&nouns, &tracker, &mut rng), Some(1));

        let id = tracker.id_at(1);
        tracker.mark_used(id);
        assert_eq!(pick_token(&nouns, &tracker, &mut rng), None);

        let any = CategorySettings::new(1, Applicability::any());
        for _ in 0..20 {
            let position = pick_token(&any, &tracker, &mut rng).unwrap();
            assert!(position == 0 || position == 2);
        }
    }
}
