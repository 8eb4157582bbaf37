//! Rarity tiers derived from recipe ratings.

use serde::{Deserialize, Serialize};

/// Presentation tier of an oracle draw.
///
/// The tier is a pure function of the winning recipe's rating and drives
/// how loudly the reveal is presented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Rating 2 or lower
    Common,

    /// Rating 3, also the tier of recipes without a rating
    Rare,

    /// Rating 4
    Epic,

    /// Rating 5
    Legendary,
}

impl Rarity {
    /// Maps a rating to its tier. Total over all `u8` values.
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            r if r >= 5 => Rarity::Legendary,
            4 => Rarity::Epic,
            3 => Rarity::Rare,
            _ => Rarity::Common,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// High tiers are revealed with light rays.
    pub fn has_rays(&self) -> bool {
        matches!(self, Rarity::Epic | Rarity::Legendary)
    }

    /// Tier name with a consistent icon for terminal output.
    pub fn with_icon(&self) -> &'static str {
        match self {
            Rarity::Legendary => "🌟 Legendary",
            Rarity::Epic => "💜 Epic",
            Rarity::Rare => "💎 Rare",
            Rarity::Common => "▫ Common",
        }
    }
}
