//! Input boundary: the submission file the host hands to the core.
//!
//! The host UI owns the widgets; this module owns the raw shape it must
//! deliver. Both ranking modes are accepted from the same field: an ordered
//! color list, or an explicit color-to-rank table.
//!
//! ```json
//! {
//!   "name": "Jihu",
//!   "age": 16,
//!   "ratings": { "clarity": [4, 4, 4], "intensity": 5 },
//!   "ranking": { "order": ["blue", "green", "..."] },
//!   "followup": {
//!     "bathbomb_use": "yes",
//!     "color_considered": "no",
//!     "followup_consent": "yes",
//!     "phone": "010-1234-5678"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::core::{FollowupAnswers, Identity, Rating, RatingSet, SurveyResponse, YesNo};
use crate::errors::SurveyError;
use crate::ranking::{Color, RankMapping};

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubmission {
    pub name: String,
    pub age: u32,
    pub ratings: RawRatings,
    pub ranking: RawRanking,
    pub followup: RawFollowup,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRatings {
    pub clarity: [u8; 3],
    pub intensity: u8,
}

/// The two collection modes, distinguished by field name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRanking {
    Order { order: Vec<Color> },
    Explicit { ranks: BTreeMap<Color, u8> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFollowup {
    pub bathbomb_use: YesNo,
    pub color_considered: YesNo,
    pub followup_consent: YesNo,
    #[serde(default)]
    pub phone: Option<String>,
}

impl RawSubmission {
    /// Validate into the core model. Every domain check happens here:
    /// ratings into [1,5], ranking into a bijection, phone gated on
    /// consent.
    pub fn into_response(self) -> Result<SurveyResponse, SurveyError> {
        if !(10..=19).contains(&self.age) {
            warn!("age {} outside the expected 10-19 range", self.age);
        }

        let [c1, c2, c3] = self.ratings.clarity;
        let ratings = RatingSet::new(
            [
                Rating::new(c1, "clarity_1")?,
                Rating::new(c2, "clarity_2")?,
                Rating::new(c3, "clarity_3")?,
            ],
            Rating::new(self.ratings.intensity, "intensity")?,
        );

        let ranks = match self.ranking {
            RawRanking::Order { order } => RankMapping::from_order(&order)?,
            RawRanking::Explicit { ranks } => RankMapping::from_explicit(ranks)?,
        };

        let followup = FollowupAnswers::new(
            self.followup.bathbomb_use,
            self.followup.color_considered,
            self.followup.followup_consent,
            self.followup.phone,
        );

        Ok(SurveyResponse {
            identity: Identity {
                name: self.name,
                age: self.age,
            },
            ratings,
            ranks,
            followup,
        })
    }
}

/// Read and validate a submission JSON file.
pub fn load_submission(path: &Path) -> Result<SurveyResponse, SurveyError> {
    debug!("loading submission from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let raw: RawSubmission = serde_json::from_str(&contents)?;
    raw.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const ORDERED: &str = indoc! {r#"
        {
          "name": "Jihu",
          "age": 16,
          "ratings": { "clarity": [4, 4, 4], "intensity": 5 },
          "ranking": { "order": [
            "blue", "green", "yellow-green", "yellow", "orange", "red",
            "pink", "purple", "brown", "white", "gray", "black"
          ]},
          "followup": {
            "bathbomb_use": "yes",
            "color_considered": "no",
            "followup_consent": "yes",
            "phone": "010-1234-5678"
          }
        }
    "#};

    const EXPLICIT: &str = indoc! {r#"
        {
          "name": "",
          "age": 13,
          "ratings": { "clarity": [1, 2, 1], "intensity": 1 },
          "ranking": { "ranks": {
            "red": 6, "orange": 5, "yellow": 4, "yellow-green": 3,
            "green": 2, "blue": 1, "purple": 8, "pink": 7,
            "brown": 9, "white": 10, "gray": 11, "black": 12
          }},
          "followup": {
            "bathbomb_use": "no",
            "color_considered": "no",
            "followup_consent": "no"
          }
        }
    "#};

    #[test]
    fn ordered_mode_parses_and_validates() {
        let raw: RawSubmission = serde_json::from_str(ORDERED).unwrap();
        let response = raw.into_response().unwrap();
        assert_eq!(response.ranks.rank_of(Color::Blue), 1);
        assert_eq!(response.ranks.rank_of(Color::Black), 12);
        assert_eq!(response.followup.phone(), "010-1234-5678");
    }

    #[test]
    fn explicit_mode_parses_and_validates() {
        let raw: RawSubmission = serde_json::from_str(EXPLICIT).unwrap();
        let response = raw.into_response().unwrap();
        assert_eq!(response.ranks.rank_of(Color::Blue), 1);
        assert_eq!(response.ranks.rank_of(Color::Red), 6);
        assert_eq!(response.followup.phone(), "");
    }

    #[test]
    fn bad_rating_in_file_is_rejected_with_field() {
        let bad = ORDERED.replace("\"intensity\": 5", "\"intensity\": 6");
        let raw: RawSubmission = serde_json::from_str(&bad).unwrap();
        let err = raw.into_response().unwrap_err();
        assert_eq!(err.field(), Some("intensity"));
    }

    #[test]
    fn duplicate_explicit_rank_in_file_is_rejected() {
        let bad = EXPLICIT.replace("\"orange\": 5", "\"orange\": 6");
        let raw: RawSubmission = serde_json::from_str(&bad).unwrap();
        let err = raw.into_response().unwrap_err();
        assert!(err.to_string().contains("duplicate rank 6"));
    }

    #[test]
    fn unknown_color_fails_at_parse_time() {
        let bad = ORDERED.replace("\"blue\"", "\"cyan\"");
        assert!(serde_json::from_str::<RawSubmission>(&bad).is_err());
    }
}
