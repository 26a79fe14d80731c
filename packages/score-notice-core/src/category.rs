//! Report categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NoticeError;

/// Test/report type selecting which schema and template apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[default]
    #[serde(rename = "EPT")]
    Ept,
    #[serde(rename = "TOEFL_JR")]
    ToeflJr,
    #[serde(rename = "TOEFL")]
    Toefl,
    #[serde(rename = "TO")]
    To,
}

impl Category {
    /// All built-in categories, in selector order.
    pub const ALL: [Category; 4] = [
        Category::Ept,
        Category::ToeflJr,
        Category::Toefl,
        Category::To,
    ];

    /// Canonical tag, e.g. `TOEFL_JR`.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Ept => "EPT",
            Category::ToeflJr => "TOEFL_JR",
            Category::Toefl => "TOEFL",
            Category::To => "TO",
        }
    }

    /// Tag with underscores shown as spaces, e.g. `TOEFL JR`.
    pub fn display_name(self) -> String {
        self.tag().replace('_', " ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = NoticeError;

    /// Accepts the tag in any case, with `-` or space in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Category::ALL
            .into_iter()
            .find(|category| category.tag() == normalized)
            .ok_or_else(|| NoticeError::UnknownCategory { tag: s.to_string() })
    }
}

// Tags are read with the same leniency as `FromStr`.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("EPT".parse::<Category>().unwrap(), Category::Ept);
        assert_eq!("toefl_jr".parse::<Category>().unwrap(), Category::ToeflJr);
        assert_eq!("TOEFL JR".parse::<Category>().unwrap(), Category::ToeflJr);
        assert_eq!("toefl-jr".parse::<Category>().unwrap(), Category::ToeflJr);
        assert_eq!(" to ".parse::<Category>().unwrap(), Category::To);
    }

    #[test]
    fn test_unknown_tag() {
        let err = "IELTS".parse::<Category>().unwrap_err();
        assert!(matches!(err, NoticeError::UnknownCategory { ref tag } if tag == "IELTS"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Category::ToeflJr.display_name(), "TOEFL JR");
        assert_eq!(Category::Ept.to_string(), "EPT");
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Category::ToeflJr).unwrap();
        assert_eq!(json, "\"TOEFL_JR\"");
        let back: Category = serde_json::from_str("\"TO\"").unwrap();
        assert_eq!(back, Category::To);
    }

    #[test]
    fn test_deserialize_accepts_loose_tags() {
        let back: Category = serde_json::from_str("\"toefl-jr\"").unwrap();
        assert_eq!(back, Category::ToeflJr);
        let back: Category = serde_json::from_str("\"Toefl Jr\"").unwrap();
        assert_eq!(back, Category::ToeflJr);
        assert!(serde_json::from_str::<Category>("\"IELTS\"").is_err());
    }
}
