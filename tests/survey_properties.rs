//! Property-based tests for the survey core.
//!
//! Invariants that should hold for all inputs:
//! - Classification is deterministic and agrees with the sign rule
//! - A dimension at exactly 3 is never negative
//! - Every valid rank collection is a bijection onto 1..=12
//! - Both collection modes agree on the same ordering

use emopalette::{classify_raw, Color, EmotionType, RankMapping, Sign};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = u8> {
    1..=5u8
}

fn color_permutation() -> impl Strategy<Value = Vec<Color>> {
    Just(Color::ALL.to_vec()).prop_shuffle()
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(
        c1 in rating(), c2 in rating(), c3 in rating(), i in rating()
    ) {
        let first = classify_raw(c1, c2, c3, i).unwrap();
        let second = classify_raw(c1, c2, c3, i).unwrap();
        prop_assert_eq!(first.emotion_type, second.emotion_type);
        prop_assert_eq!(first.clarity_avg, second.clarity_avg);
        prop_assert_eq!(first.intensity, second.intensity);
    }

    #[test]
    fn prop_code_always_resolves(
        c1 in rating(), c2 in rating(), c3 in rating(), i in rating()
    ) {
        let classification = classify_raw(c1, c2, c3, i).unwrap();
        let code = classification.emotion_type.code();
        prop_assert!(["++", "--", "-+", "+-"].contains(&code));
        prop_assert_eq!(
            EmotionType::from_code(code).unwrap(),
            classification.emotion_type
        );
    }

    #[test]
    fn prop_dimension_at_three_is_positive(c1 in rating(), c2 in rating(), c3 in rating()) {
        let classification = classify_raw(c1, c2, c3, 3).unwrap();
        // Intensity of exactly 3 must never produce a '-' second character.
        prop_assert_eq!(classification.emotion_type.code().as_bytes()[1], b'+');
        if classification.clarity_avg >= 3.0 {
            prop_assert_eq!(Sign::of(classification.clarity_avg), Sign::Plus);
        }
    }

    #[test]
    fn prop_ordered_collection_is_bijective(order in color_permutation()) {
        let mapping = RankMapping::from_order(&order).unwrap();
        let mut seen = [false; Color::COUNT];
        for color in Color::ALL {
            let rank = mapping.rank_of(color);
            prop_assert!((1..=12).contains(&rank));
            prop_assert!(!seen[rank as usize - 1], "rank {} repeated", rank);
            seen[rank as usize - 1] = true;
        }
        prop_assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn prop_collection_modes_agree(order in color_permutation()) {
        let from_order = RankMapping::from_order(&order).unwrap();
        let explicit: Vec<(Color, u8)> = order
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8 + 1))
            .collect();
        let from_explicit = RankMapping::from_explicit(explicit).unwrap();
        prop_assert_eq!(from_order, from_explicit);
    }

    #[test]
    fn prop_duplicate_rank_is_rejected(order in color_permutation(), dup in 0..11usize) {
        let mut pairs: Vec<(Color, u8)> = order
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8 + 1))
            .collect();
        // Give two colors the same rank.
        pairs[dup + 1].1 = pairs[dup].1;
        prop_assert!(RankMapping::from_explicit(pairs).is_err());
    }
}
