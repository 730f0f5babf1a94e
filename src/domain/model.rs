use serde::{Deserialize, Serialize};

/// A calendar month, guaranteed to be in the range 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month(u8);

impl Month {
    /// Returns `None` if `number` is outside 1-12.
    pub fn new(number: u8) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Season for this month, by direct table lookup.
    pub fn season(self) -> Season {
        SEASON_BY_MONTH[(self.0 - 1) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    /// Canonical lowercase label ("summer", "autumn", ...).
    pub fn label(self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::Spring => "spring",
        }
    }

    /// Capitalized label for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }

    /// Gardening advice for this season.
    pub fn advice(self) -> &'static str {
        ADVICE_BY_SEASON
            .iter()
            .find(|(season, _)| *season == self)
            .map(|(_, advice)| *advice)
            .unwrap_or(FALLBACK_ADVICE)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// 固定查表,不用 if-else 鏈
// December-February are summer (Southern-hemisphere assignment).
const SEASON_BY_MONTH: [Season; 12] = [
    Season::Summer, // Jan
    Season::Summer, // Feb
    Season::Autumn, // Mar
    Season::Autumn, // Apr
    Season::Autumn, // May
    Season::Winter, // Jun
    Season::Winter, // Jul
    Season::Winter, // Aug
    Season::Spring, // Sep
    Season::Spring, // Oct
    Season::Spring, // Nov
    Season::Summer, // Dec
];

const ADVICE_BY_SEASON: [(Season, &str); 4] = [
    (
        Season::Summer,
        "Water plants early in the morning and mulch to retain moisture.",
    ),
    (Season::Autumn, "Plant bulbs and enrich soil with compost."),
    (
        Season::Winter,
        "Protect sensitive plants from frost and reduce watering.",
    ),
    (
        Season::Spring,
        "Start sowing seeds and fertilise to support new growth.",
    ),
];

/// Returned when a season has no entry in the advice table.
pub const FALLBACK_ADVICE: &str = "No advice available.";
