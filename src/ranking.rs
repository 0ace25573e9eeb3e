//! Color preference ranking.
//!
//! The color set is closed: twelve named colors in a fixed canonical order.
//! A [`RankMapping`] assigns each color a unique rank in 1..=12 (1 = most
//! positive). Two collection modes feed it, matching the two ways a host UI
//! can gather the ordering: an already-ordered list, or an explicit rank
//! per color. Both must yield a permutation; the explicit mode verifies it
//! and rejects duplicates or gaps, naming the conflicting colors.

use serde::{Deserialize, Serialize};

use crate::errors::SurveyError;

/// One of the twelve fixed survey colors, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    YellowGreen,
    Green,
    Blue,
    Purple,
    Pink,
    Brown,
    White,
    Gray,
    Black,
}

impl Color {
    pub const COUNT: usize = 12;

    pub const ALL: [Color; Color::COUNT] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::YellowGreen,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Pink,
        Color::Brown,
        Color::White,
        Color::Gray,
        Color::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::YellowGreen => "yellow-green",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Black => "black",
        }
    }

    pub fn name_ko(self) -> &'static str {
        match self {
            Self::Red => "빨강",
            Self::Orange => "주황",
            Self::Yellow => "노랑",
            Self::YellowGreen => "연두",
            Self::Green => "초록",
            Self::Blue => "파랑",
            Self::Purple => "보라",
            Self::Pink => "분홍",
            Self::Brown => "갈색",
            Self::White => "하양",
            Self::Gray => "회색",
            Self::Black => "검정",
        }
    }

    /// Display color value. Presentation metadata only; no logic reads it.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#FF0000",
            Self::Orange => "#FFA500",
            Self::Yellow => "#FFFF00",
            Self::YellowGreen => "#ADFF2F",
            Self::Green => "#008000",
            Self::Blue => "#0000FF",
            Self::Purple => "#800080",
            Self::Pink => "#FFC0CB",
            Self::Brown => "#A52A2A",
            Self::White => "#FFFFFF",
            Self::Gray => "#808080",
            Self::Black => "#000000",
        }
    }

    /// Parse either the English or the Korean name.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == name || c.name_ko() == name)
    }

    /// Position in the canonical order, 0-based.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A bijective assignment of ranks 1..=12 to the twelve colors.
///
/// The permutation invariant is enforced by every constructor; a value of
/// this type always holds each rank exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankMapping {
    // Indexed by canonical color index.
    ranks: [u8; Color::COUNT],
}

impl RankMapping {
    /// Ordered-list mode: the colors arranged most-positive first; rank is
    /// the 1-based position. Rejects repeated or missing colors.
    pub fn from_order(order: &[Color]) -> Result<Self, SurveyError> {
        if order.len() != Color::COUNT {
            return Err(SurveyError::validation(format!(
                "ranking order has {} colors, expected {}",
                order.len(),
                Color::COUNT
            )));
        }

        let mut ranks = [0u8; Color::COUNT];
        for (position, color) in order.iter().enumerate() {
            let slot = &mut ranks[color.index()];
            if *slot != 0 {
                return Err(SurveyError::validation(format!(
                    "color {color} appears more than once in the ranking order"
                )));
            }
            *slot = position as u8 + 1;
        }
        // Length and uniqueness together guarantee totality.
        Ok(Self { ranks })
    }

    /// Explicit-rank mode: a rank per color, verified to be a bijection
    /// onto 1..=12. Out-of-range, duplicate, and missing ranks are all
    /// rejected with the colors involved named.
    pub fn from_explicit<I>(pairs: I) -> Result<Self, SurveyError>
    where
        I: IntoIterator<Item = (Color, u8)>,
    {
        let mut ranks = [0u8; Color::COUNT];
        // Which color claimed each rank, for duplicate reporting.
        let mut claimed: [Option<Color>; Color::COUNT] = [None; Color::COUNT];

        for (color, rank) in pairs {
            if !(1..=Color::COUNT as u8).contains(&rank) {
                return Err(SurveyError::validation_in(
                    format!("rank {rank} outside 1-{}", Color::COUNT),
                    color.name(),
                ));
            }
            if ranks[color.index()] != 0 {
                return Err(SurveyError::validation_in(
                    format!("color {color} was ranked more than once"),
                    color.name(),
                ));
            }
            if let Some(previous) = claimed[rank as usize - 1] {
                return Err(SurveyError::validation(format!(
                    "duplicate rank {rank}: assigned to both {previous} and {color}"
                )));
            }
            ranks[color.index()] = rank;
            claimed[rank as usize - 1] = Some(color);
        }

        let unranked: Vec<&str> = Color::ALL
            .into_iter()
            .filter(|c| ranks[c.index()] == 0)
            .map(Color::name)
            .collect();
        if !unranked.is_empty() {
            return Err(SurveyError::validation(format!(
                "no rank assigned to: {}",
                unranked.join(", ")
            )));
        }

        Ok(Self { ranks })
    }

    /// The rank of a color. Total: every color has one.
    pub fn rank_of(&self, color: Color) -> u8 {
        self.ranks[color.index()]
    }

    /// Pairs in canonical color order, the order exports use.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        Color::ALL.into_iter().map(|c| (c, self.rank_of(c)))
    }

    /// Colors from rank 1 to rank 12, for display.
    pub fn by_rank(&self) -> [Color; Color::COUNT] {
        let mut out = [Color::Red; Color::COUNT];
        for color in Color::ALL {
            out[self.rank_of(color) as usize - 1] = color;
        }
        out
    }
}
