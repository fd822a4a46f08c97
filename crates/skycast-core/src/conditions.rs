//! Condition code catalogue
//!
//! Condition ids follow the provider's numbering: the hundreds digit selects
//! the group, 800 is clear sky and 801-804 are cloud cover levels.

use serde::{Deserialize, Serialize};

/// Sky condition group for a provider condition id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionGroup {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

impl ConditionGroup {
    pub fn from_condition_id(id: u16) -> Self {
        match id {
            200..=299 => ConditionGroup::Thunderstorm,
            300..=399 => ConditionGroup::Drizzle,
            500..=599 => ConditionGroup::Rain,
            600..=699 => ConditionGroup::Snow,
            700..=799 => ConditionGroup::Atmosphere,
            800 => ConditionGroup::Clear,
            801..=804 => ConditionGroup::Clouds,
            _ => ConditionGroup::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionGroup::Thunderstorm => "Thunderstorm",
            ConditionGroup::Drizzle => "Drizzle",
            ConditionGroup::Rain => "Rain",
            ConditionGroup::Snow => "Snow",
            ConditionGroup::Atmosphere => "Atmosphere",
            ConditionGroup::Clear => "Clear",
            ConditionGroup::Clouds => "Clouds",
            ConditionGroup::Unknown => "Unknown",
        }
    }

    /// Whether this group involves precipitation
    pub fn has_precipitation(&self) -> bool {
        matches!(
            self,
            ConditionGroup::Thunderstorm
                | ConditionGroup::Drizzle
                | ConditionGroup::Rain
                | ConditionGroup::Snow
        )
    }
}

impl std::fmt::Display for ConditionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough UV index derived from sky condition alone.
///
/// The forecast feed carries no UV data, so this is a heuristic per
/// condition range rather than a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UvEstimate {
    pub value: u8,
    pub level: &'static str,
}

impl UvEstimate {
    pub fn from_condition_id(id: u16) -> Self {
        let (value, level) = match id {
            800..=801 => (8, "Very High"),
            802..=804 => (4, "Moderate"),
            700..=781 => (3, "Low"),
            600..=622 => (2, "Low"),
            500..=531 => (1, "Low"),
            _ => (0, "Low"),
        };
        Self { value, level }
    }
}

/// Day or night rendering of an icon code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Day,
    Night,
    Unknown,
}

impl IconVariant {
    pub fn from_icon_code(code: &str) -> Self {
        match code.chars().last() {
            Some('d') => IconVariant::Day,
            Some('n') => IconVariant::Night,
            _ => IconVariant::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_groups() {
        assert_eq!(
            ConditionGroup::from_condition_id(211),
            ConditionGroup::Thunderstorm
        );
        assert_eq!(ConditionGroup::from_condition_id(301), ConditionGroup::Drizzle);
        assert_eq!(ConditionGroup::from_condition_id(500), ConditionGroup::Rain);
        assert_eq!(ConditionGroup::from_condition_id(601), ConditionGroup::Snow);
        assert_eq!(
            ConditionGroup::from_condition_id(741),
            ConditionGroup::Atmosphere
        );
        assert_eq!(ConditionGroup::from_condition_id(800), ConditionGroup::Clear);
        assert_eq!(ConditionGroup::from_condition_id(804), ConditionGroup::Clouds);
        assert_eq!(ConditionGroup::from_condition_id(900), ConditionGroup::Unknown);
        assert_eq!(ConditionGroup::from_condition_id(0), ConditionGroup::Unknown);
    }

    #[test]
    fn test_precipitation_groups() {
        assert!(ConditionGroup::Rain.has_precipitation());
        assert!(ConditionGroup::Snow.has_precipitation());
        assert!(!ConditionGroup::Clear.has_precipitation());
        assert!(!ConditionGroup::Atmosphere.has_precipitation());
    }

    #[test]
    fn test_uv_estimate_ranges() {
        assert_eq!(UvEstimate::from_condition_id(800).value, 8);
        assert_eq!(UvEstimate::from_condition_id(801).level, "Very High");
        assert_eq!(UvEstimate::from_condition_id(803).value, 4);
        assert_eq!(UvEstimate::from_condition_id(781).value, 3);
        assert_eq!(UvEstimate::from_condition_id(622).value, 2);
        assert_eq!(UvEstimate::from_condition_id(531).value, 1);
        // 532..=599 falls outside the rain heuristic
        assert_eq!(UvEstimate::from_condition_id(550).value, 0);
        assert_eq!(UvEstimate::from_condition_id(211).value, 0);
    }

    #[test]
    fn test_icon_variant() {
        assert_eq!(IconVariant::from_icon_code("01d"), IconVariant::Day);
        assert_eq!(IconVariant::from_icon_code("10n"), IconVariant::Night);
        assert_eq!(IconVariant::from_icon_code(""), IconVariant::Unknown);
        assert_eq!(IconVariant::from_icon_code("01x"), IconVariant::Unknown);
    }
}
