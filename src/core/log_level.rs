//! Log level definitions
//!
//! The three character display token doubles as the wire token, so a level
//! serializes as `"DBG"`, `"INF"`, `"WRN"` or `"ERR"`.

use super::error::LoggerError;
use colored::Color;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Debug data
    Debug,
    /// Machine-actionable data
    Info,
    /// Human-observable data
    Warn,
    /// Human-actionable data
    Error,
}

impl Level {
    /// Every level, in conventional severity order
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error => "ERR",
        }
    }

    /// Terminal color used by the shell handlers
    pub fn color(&self) -> Color {
        match self {
            Level::Debug => Color::Black,
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Blue,
        }
    }

    /// ANSI foreground number of [`Level::color`], e.g. `"31"` for errors
    pub fn color_code(&self) -> String {
        self.color().to_fg_str().to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Parses a level token, ignoring case and surrounding double quotes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches('"').to_uppercase().as_str() {
            "DBG" => Ok(Level::Debug),
            "INF" => Ok(Level::Info),
            "WRN" => Ok(Level::Warn),
            "ERR" => Ok(Level::Error),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}
