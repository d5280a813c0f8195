//! Enumerations used in requests and responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Level of detail requested through the `extended` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Extended {
    /// Title, year and ids only.
    #[default]
    Min,
    /// Minimal info plus images.
    Images,
    /// Complete info.
    Full,
    /// Complete info plus images.
    FullImages,
}

impl Extended {
    pub fn as_str(self) -> &'static str {
        match self {
            Extended::Min => "min",
            Extended::Images => "images",
            Extended::Full => "full",
            Extended::FullImages => "full,images",
        }
    }
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Extended {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A rating on trakt's 1 to 10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    WeakSauce = 1,
    Terrible = 2,
    Bad = 3,
    Poor = 4,
    Meh = 5,
    Fair = 6,
    Good = 7,
    Great = 8,
    Superb = 9,
    TotallyNinja = 10,
}

impl Rating {
    pub const ALL: [Rating; 10] = [
        Rating::WeakSauce,
        Rating::Terrible,
        Rating::Bad,
        Rating::Poor,
        Rating::Meh,
        Rating::Fair,
        Rating::Good,
        Rating::Great,
        Rating::Superb,
        Rating::TotallyNinja,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .ok_or_else(|| format!("rating must be between 1 and 10, got {value}"))
    }
}

/// Restricts a ratings listing to one rating value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingsFilter {
    #[default]
    All,
    Only(Rating),
}

impl RatingsFilter {
    /// Path suffix appended to a ratings endpoint: empty, or `/<value>`.
    pub fn path_suffix(self) -> String {
        match self {
            RatingsFilter::All => String::new(),
            RatingsFilter::Only(rating) => format!("/{}", rating.value()),
        }
    }
}
