//! Field conditions

use hoenn_codec::BattleWeatherFlags;

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
}

impl Weather {
    /// Collapse the battle weather word to the active weather, if any
    pub fn from_flags(flags: BattleWeatherFlags) -> Option<Self> {
        if flags.is_rain() {
            Some(Weather::Rain)
        } else if flags.is_sun() {
            Some(Weather::Sun)
        } else if flags.is_sandstorm() {
            Some(Weather::Sand)
        } else if flags.is_hail() {
            Some(Weather::Hail)
        } else {
            None
        }
    }

    /// Parse a display or config name
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "sunnyday" | "sun" => Some(Weather::Sun),
            "raindance" | "rain" => Some(Weather::Rain),
            "sandstorm" | "sand" => Some(Weather::Sand),
            "hail" => Some(Weather::Hail),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sandstorm",
            Weather::Hail => "Hail",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_from_flags() {
        assert_eq!(Weather::from_flags(BattleWeatherFlags::empty()), None);
        assert_eq!(
            Weather::from_flags(BattleWeatherFlags::RAIN_DOWNPOUR),
            Some(Weather::Rain)
        );
        assert_eq!(
            Weather::from_flags(BattleWeatherFlags::SUN_PERMANENT),
            Some(Weather::Sun)
        );
        assert_eq!(
            Weather::from_flags(BattleWeatherFlags::SANDSTORM_TEMPORARY),
            Some(Weather::Sand)
        );
        assert_eq!(
            Weather::from_flags(BattleWeatherFlags::HAIL),
            Some(Weather::Hail)
        );
    }

    #[test]
    fn test_weather_from_name() {
        assert_eq!(Weather::from_name("Rain Dance"), Some(Weather::Rain));
        assert_eq!(Weather::from_name("sunny-day"), Some(Weather::Sun));
        assert_eq!(Weather::from_name("Sandstorm"), Some(Weather::Sand));
        assert_eq!(Weather::from_name("snow"), None);
    }

    #[test]
    fn test_weather_display() {
        assert_eq!(Weather::Sand.to_string(), "Sandstorm");
        assert_eq!(Weather::Hail.to_string(), "Hail");
    }
}
