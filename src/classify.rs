//! Emotion experience type classifier.
//!
//! Pure data transformation: average the three clarity ratings, take the
//! sign of each dimension under the hard >= 3 threshold, and dispatch the
//! sign pair to one of the four types. Deterministic and idempotent.

use crate::core::{Classification, EmotionType, Rating, RatingSet, Sign};
use crate::errors::SurveyError;

/// Classify a validated rating set. Cannot fail: the domain was enforced
/// when the ratings were constructed.
pub fn classify(ratings: &RatingSet) -> Classification {
    let clarity_avg = ratings
        .clarity
        .iter()
        .map(|r| f64::from(r.get()))
        .sum::<f64>()
        / 3.0;
    let emotion_type = EmotionType::from_signs(
        Sign::of(clarity_avg),
        Sign::of(f64::from(ratings.intensity.get())),
    );

    Classification {
        clarity_avg,
        intensity: ratings.intensity,
        emotion_type,
    }
}

/// Classify from raw integers, validating each into [1,5] first. For hosts
/// holding unchecked input (the CLI, a form handler).
pub fn classify_raw(
    clarity_1: u8,
    clarity_2: u8,
    clarity_3: u8,
    intensity: u8,
) -> Result<Classification, SurveyError> {
    let ratings = RatingSet::new(
        [
            Rating::new(clarity_1, "clarity_1")?,
            Rating::new(clarity_2, "clarity_2")?,
            Rating::new(clarity_3, "clarity_3")?,
        ],
        Rating::new(intensity, "intensity")?,
    );
    Ok(classify(&ratings))
}
