//! Shared deterministic types for sorter core logic.
//!
//! These types define stable contracts between the classifier and its callers.
//! They carry no state beyond their values and are freely `Copy`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handling stack a package is dispatched to.
///
/// Variants are declared in increasing order of restrictiveness, so the
/// derived `Ord` can be used to compare outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Neither bulky nor heavy.
    Standard,
    /// Exactly one of bulky or heavy.
    Special,
    /// Both bulky and heavy.
    Rejected,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Standard,
        Classification::Special,
        Classification::Rejected,
    ];

    /// Stable label used on stdout and in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Standard => "STANDARD",
            Classification::Special => "SPECIAL",
            Classification::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positional input of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    /// Fields in positional order; errors report the first offender in this order.
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_stack_names() {
        let labels: Vec<String> = Classification::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["STANDARD", "SPECIAL", "REJECTED"]);
    }

    #[test]
    fn serde_uses_uppercase_labels() {
        let json = serde_json::to_string(&Classification::Rejected).expect("serialize");
        assert_eq!(json, "\"REJECTED\"");
        let parsed: Classification = serde_json::from_str("\"SPECIAL\"").expect("parse");
        assert_eq!(parsed, Classification::Special);
    }

    #[test]
    fn ordering_follows_restrictiveness() {
        assert!(Classification::Standard < Classification::Special);
        assert!(Classification::Special < Classification::Rejected);
    }
}
