//! Content catalog - educational material and difficulty levels.

use serde::{Deserialize, Serialize};

/// Difficulty classification of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Entry-level material
    Basic,
    /// Requires prior basics
    Intermediate,
    /// Deep-dive material
    Advanced,
}

impl Level {
    /// All levels, in declaration order.
    pub const ALL: [Level; 3] = [Level::Basic, Level::Intermediate, Level::Advanced];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Basic => "BASIC",
            Level::Intermediate => "INTERMEDIATE",
            Level::Advanced => "ADVANCED",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0}")]
pub struct ParseLevelError(String);

impl std::str::FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Level::Basic),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// A unit of educational material.
///
/// Equality and hashing cover every field, so two items built separately
/// from the same name, level and duration are the same item wherever they
/// are compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentItem {
    name: String,
    level: Level,
    /// Duration in minutes
    duration: u32,
}

impl ContentItem {
    /// Create a new content item.
    pub fn new(name: impl Into<String>, level: Level, duration: u32) -> Self {
        Self {
            name: name.into(),
            level,
            duration,
        }
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Difficulty level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl std::fmt::Display for ContentItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {} min)", self.name, self.level, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_level_parse() {
        assert_eq!("basic".parse::<Level>(), Ok(Level::Basic));
        assert_eq!("INTERMEDIATE".parse::<Level>(), Ok(Level::Intermediate));
        assert_eq!("Advanced".parse::<Level>(), Ok(Level::Advanced));
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_display_round_trips_through_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_items_compare_by_value() {
        let a = ContentItem::new("Kotlin basics", Level::Basic, 60);
        let b = ContentItem::new("Kotlin basics", Level::Basic, 60);
        let c = ContentItem::new("Kotlin basics", Level::Basic, 90);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_item_display() {
        let item = ContentItem::new("Exceptions", Level::Intermediate, 120);
        assert_eq!(item.to_string(), "Exceptions (INTERMEDIATE, 120 min)");
    }

    #[test]
    fn test_item_serializes_all_fields() {
        let item = ContentItem::new("Functions", Level::Basic, 120);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Functions");
        assert_eq!(json["level"], "Basic");
        assert_eq!(json["duration"], 120);
    }
}
