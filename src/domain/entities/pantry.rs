//! Pantry entity and the enums used to classify it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Administrative region a pantry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    pub const ALL: [Borough; 5] = [
        Borough::Manhattan,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::Bronx,
        Borough::StatenIsland,
    ];

    /// Display name, as it appears in the dataset and the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the known boroughs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown borough '{0}'")]
pub struct UnknownBorough(pub String);

impl FromStr for Borough {
    type Err = UnknownBorough;

    /// Case-insensitive; also accepts "The Bronx" and "StatenIsland".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "manhattan" => Ok(Borough::Manhattan),
            "brooklyn" => Ok(Borough::Brooklyn),
            "queens" => Ok(Borough::Queens),
            "bronx" | "the bronx" => Ok(Borough::Bronx),
            "staten island" | "statenisland" => Ok(Borough::StatenIsland),
            _ => Err(UnknownBorough(s.trim().to_string())),
        }
    }
}

/// Day of the week, in dataset column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Short code used in query strings and CSV headers.
    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day '{0}'")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Accepts short codes (`mon`, `thur`) and full names (`Monday`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Mon),
            "tue" | "tues" | "tuesday" => Ok(Weekday::Tue),
            "wed" | "wednesday" => Ok(Weekday::Wed),
            "thu" | "thur" | "thurs" | "thursday" => Ok(Weekday::Thu),
            "fri" | "friday" => Ok(Weekday::Fri),
            "sat" | "saturday" => Ok(Weekday::Sat),
            "sun" | "sunday" => Ok(Weekday::Sun),
            _ => Err(UnknownWeekday(s.trim().to_string())),
        }
    }
}

/// Per-day opening flags of a pantry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Availability([bool; 7]);

impl Availability {
    pub fn new(flags: [bool; 7]) -> Self {
        Self(flags)
    }

    /// Builds an availability open exactly on `days`.
    pub fn open_on(days: &[Weekday]) -> Self {
        let mut flags = [false; 7];
        for day in days {
            flags[day.index()] = true;
        }
        Self(flags)
    }

    pub fn is_open(&self, day: Weekday) -> bool {
        self.0[day.index()]
    }

    pub fn set(&mut self, day: Weekday, open: bool) {
        self.0[day.index()] = open;
    }

    /// Days with the flag set, in week order.
    pub fn open_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.is_open(*day))
            .collect()
    }
}

/// A food pantry as loaded from the pantry dataset.
///
/// Coordinates are optional: records without usable coordinates still show up
/// in the table but are never plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryRecord {
    pub program: String,
    pub borough: Borough,
    pub availability: Availability,
    pub hours: String,
    pub phone: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PantryRecord {
    /// Returns the marker position when both coordinates are finite.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn is_plottable(&self) -> bool {
        self.coordinates().is_some()
    }
}
