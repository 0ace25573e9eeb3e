//! Core data model for the survey.
//!
//! Everything here is plain data with validating constructors. The host UI
//! collects raw values and converts them into these types once; after that
//! the classification and assembly steps cannot fail.

use serde::{Deserialize, Serialize};

use crate::errors::SurveyError;
use crate::ranking::RankMapping;

/// A single Likert rating, validated into [1,5] at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8, field: &str) -> Result<Self, SurveyError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SurveyError::validation_in(
                format!("rating {value} outside 1-5"),
                field,
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = SurveyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value, "rating")
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four ratings a classification needs: three clarity items and one
/// intensity item. All present by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSet {
    pub clarity: [Rating; 3],
    pub intensity: Rating,
}

impl RatingSet {
    pub fn new(clarity: [Rating; 3], intensity: Rating) -> Self {
        Self { clarity, intensity }
    }
}

/// Sign of a dimension under the hard threshold rule: 3 counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn of(value: f64) -> Self {
        if value >= 3.0 {
            Self::Plus
        } else {
            Self::Minus
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// Which label set appears in exports and terminal output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LabelLanguage {
    #[default]
    En,
    Ko,
}

/// Emotion experience type: the sign pair of (clarity, intensity) mapped to
/// one of four categories. The mapping is exhaustive over the enum, so no
/// code can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionType {
    /// "++" — high clarity, high intensity.
    Intense,
    /// "--" — low clarity, low intensity.
    Blunted,
    /// "-+" — low clarity, high intensity.
    Overwhelmed,
    /// "+-" — high clarity, low intensity.
    Stable,
}

impl EmotionType {
    pub const ALL: [EmotionType; 4] = [
        EmotionType::Intense,
        EmotionType::Blunted,
        EmotionType::Overwhelmed,
        EmotionType::Stable,
    ];

    pub fn from_signs(clarity: Sign, intensity: Sign) -> Self {
        match (clarity, intensity) {
            (Sign::Plus, Sign::Plus) => Self::Intense,
            (Sign::Minus, Sign::Minus) => Self::Blunted,
            (Sign::Minus, Sign::Plus) => Self::Overwhelmed,
            (Sign::Plus, Sign::Minus) => Self::Stable,
        }
    }

    /// Parse a two-character sign code. Only used when re-reading exported
    /// data; live classification goes through [`EmotionType::from_signs`]
    /// and cannot produce an unknown code.
    pub fn from_code(code: &str) -> Result<Self, SurveyError> {
        match code {
            "++" => Ok(Self::Intense),
            "--" => Ok(Self::Blunted),
            "-+" => Ok(Self::Overwhelmed),
            "+-" => Ok(Self::Stable),
            other => Err(SurveyError::internal(format!(
                "unknown emotion code '{other}'"
            ))),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Intense => "++",
            Self::Blunted => "--",
            Self::Overwhelmed => "-+",
            Self::Stable => "+-",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Intense => "intense",
            Self::Blunted => "blunted",
            Self::Overwhelmed => "overwhelmed",
            Self::Stable => "stable",
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            Self::Intense => "격렬형",
            Self::Blunted => "둔감형",
            Self::Overwhelmed => "압도형",
            Self::Stable => "안정형",
        }
    }

    pub fn label_in(self, language: LabelLanguage) -> &'static str {
        match language {
            LabelLanguage::En => self.label(),
            LabelLanguage::Ko => self.label_ko(),
        }
    }
}

/// Classifier output. `clarity_avg` keeps full precision; rounding happens
/// only at display and export time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub clarity_avg: f64,
    pub intensity: Rating,
    pub emotion_type: EmotionType,
}

impl Classification {
    /// Clarity average rounded to 2 decimal places, as exported.
    pub fn rounded_clarity_avg(&self) -> f64 {
        (self.clarity_avg * 100.0).round() / 100.0
    }
}

/// Respondent identity. The name carries no format constraint and may be
/// empty; the age range (10-19) is the host's concern, not re-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub age: u32,
}

/// A binary answer, serialized as "yes"/"no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The follow-up answers. The phone number is kept only when follow-up
/// consent was given; the exported column is always present either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowupAnswers {
    pub bathbomb_use: YesNo,
    pub color_considered: YesNo,
    pub followup_consent: YesNo,
    phone: String,
}

impl FollowupAnswers {
    pub fn new(
        bathbomb_use: YesNo,
        color_considered: YesNo,
        followup_consent: YesNo,
        phone: Option<String>,
    ) -> Self {
        let phone = match followup_consent {
            YesNo::Yes => phone.unwrap_or_default(),
            YesNo::No => String::new(),
        };
        Self {
            bathbomb_use,
            color_considered,
            followup_consent,
            phone,
        }
    }

    /// The phone value as exported: the given number under consent,
    /// otherwise empty.
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// A complete validated submission: everything the host collected, ready
/// for classification and assembly.
#[derive(Debug, Clone)]
pub struct SurveyResponse {
    pub identity: Identity,
    pub ratings: RatingSet,
    pub ranks: RankMapping,
    pub followup: FollowupAnswers,
}
