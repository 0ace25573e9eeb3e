//! Response record assembly.
//!
//! `assemble` is a structural merge: it computes nothing, it lays the
//! already-derived values out as one flat, ordered, immutable record — the
//! unit of export. The field set is fixed; only the phone value may be
//! empty, never absent.

use chrono::{DateTime, Local};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::{Classification, FollowupAnswers, Identity, LabelLanguage};
use crate::ranking::RankMapping;

/// A scalar cell in the record. Floats render with 2 decimal places.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:.2}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(x) => serializer.serialize_f64((x * 100.0).round() / 100.0),
        }
    }
}

/// One completed submission as a flat, ordered field list. Constructed
/// exactly once per submission by [`assemble`] and never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    fields: Vec<(String, FieldValue)>,
}

impl ResponseRecord {
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Field names in export column order.
    pub fn header(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for ResponseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Merge classifier output, rank mapping, and passthrough answers into the
/// export record. Column order: timestamp, identity, classifier outputs,
/// follow-ups, then one rank column per color in canonical order.
pub fn assemble(
    identity: &Identity,
    classification: &Classification,
    ranks: &RankMapping,
    followup: &FollowupAnswers,
    submitted_at: DateTime<Local>,
    language: LabelLanguage,
) -> ResponseRecord {
    let mut fields: Vec<(String, FieldValue)> = Vec::with_capacity(22);

    let mut push = |name: &str, value: FieldValue| fields.push((name.to_string(), value));

    push(
        "submitted_at",
        FieldValue::Text(submitted_at.format("%Y-%m-%d %H:%M:%S").to_string()),
    );
    push("name", FieldValue::Text(identity.name.clone()));
    push("age", FieldValue::Int(i64::from(identity.age)));
    push(
        "emotion_type",
        FieldValue::Text(classification.emotion_type.label_in(language).to_string()),
    );
    push("clarity_avg", FieldValue::Float(classification.clarity_avg));
    push(
        "intensity",
        FieldValue::Int(i64::from(classification.intensity.get())),
    );
    push(
        "bathbomb_use",
        FieldValue::Text(followup.bathbomb_use.to_string()),
    );
    push(
        "color_considered",
        FieldValue::Text(followup.color_considered.to_string()),
    );
    push(
        "followup_consent",
        FieldValue::Text(followup.followup_consent.to_string()),
    );
    push("phone", FieldValue::Text(followup.phone().to_string()));

    for (color, rank) in ranks.iter() {
        fields.push((format!("{color}_rank"), FieldValue::Int(i64::from(rank))));
    }

    ResponseRecord { fields }
}
