//! Contact category
//!
//! A closed classification. The serialized form is the variant name exactly
//! as written (`"Family"`, `"Friends"`, `"Work"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a contact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Family,
    Friends,
    Work,
}

impl Category {
    /// All categories, in selection order
    pub const ALL: [Category; 3] = [Category::Family, Category::Friends, Category::Work];

    /// The serialized name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Friends => "Friends",
            Self::Work => "Work",
        }
    }

    /// Parse a category from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "family" => Some(Self::Family),
            "friends" | "friend" => Some(Self::Friends),
            "work" => Some(Self::Work),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown category '{}' (expected one of: Family, Friends, Work)",
                s.trim()
            )
        })
    }
}
