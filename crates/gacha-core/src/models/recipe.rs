//! Recipe model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Rarity;

/// Rating assumed for recipes that never had one.
pub const DEFAULT_RATING: u8 = 3;

/// Lowest rating a user can assign.
pub const MIN_RATING: u8 = 1;

/// Highest rating a user can assign.
pub const MAX_RATING: u8 = 5;

fn default_rating() -> u8 {
    DEFAULT_RATING
}

/// Generates a fresh recipe id of the form `uuid-<v4>`.
pub fn generate_id() -> String {
    format!("uuid-{}", uuid::Uuid::new_v4())
}

/// A recipe in the cookbook.
///
/// Field names serialize in camelCase so that backups stay compatible with
/// files written by earlier versions of the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, immutable once assigned
    pub id: String,

    /// Title shown in the cookbook and on oracle reveals
    pub title: String,

    /// Image reference (usually a URL)
    #[serde(default)]
    pub image: String,

    /// Optional external link to the full recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Preparation time in minutes
    #[serde(default)]
    pub time_minutes: u32,

    /// Free-form tags in the order the user entered them
    #[serde(default)]
    pub tags: Vec<String>,

    /// Rating from 1 to 5
    #[serde(default = "default_rating")]
    pub rating: u8,

    /// Date the recipe was last cooked, if ever
    #[serde(default)]
    pub last_cooked: Option<Date>,
}

impl Recipe {
    /// Creates a recipe with the given id and title and default values for
    /// everything else.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: String::new(),
            link: None,
            time_minutes: 0,
            tags: Vec::new(),
            rating: DEFAULT_RATING,
            last_cooked: None,
        }
    }

    /// Sets the preparation time.
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.time_minutes = minutes;
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// The rating used for weighting and rarity. An unset rating (0) counts
    /// as the default.
    pub fn effective_rating(&self) -> u8 {
        if self.rating == 0 {
            DEFAULT_RATING
        } else {
            self.rating
        }
    }

    /// Presentation tier of this recipe when it wins a draw.
    pub fn rarity(&self) -> Rarity {
        Rarity::from_rating(self.effective_rating())
    }

    /// Number of entries this recipe occupies in the oracle pool.
    ///
    /// Ratings of 5 (or above) get three entries, a rating of 4 gets two,
    /// anything else gets one.
    pub fn pool_copies(&self) -> usize {
        match self.rating {
            r if r >= MAX_RATING => 3,
            4 => 2,
            _ => 1,
        }
    }

    /// Comma-separated tag list for display.
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }
}
