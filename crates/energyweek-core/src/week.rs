//! Calendar vocabulary for the tracked week.
//!
//! A week runs Monday through Friday and each day is split into three
//! time blocks. Energy is self-reported per cell on a four-step ordinal
//! scale. All three enums carry a fixed canonical order that every
//! derived list in the crate follows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A tracked weekday (Monday through Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in canonical order (Monday first).
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Position in canonical order (0-4).
    pub fn index(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    /// Full lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    /// Three-letter label for table headers.
    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }

    /// Map a calendar weekday onto the tracked week.
    ///
    /// Saturday and Sunday are not tracked and return `None`.
    pub fn from_chrono(day: chrono::Weekday) -> Option<Weekday> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Monday),
            "tue" | "tuesday" => Ok(Weekday::Tuesday),
            "wed" | "wednesday" => Ok(Weekday::Wednesday),
            "thu" | "thursday" => Ok(Weekday::Thursday),
            "fri" | "friday" => Ok(Weekday::Friday),
            _ => Err(ParseError::UnknownWeekday(s.to_string())),
        }
    }
}

/// A reporting block within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBlock {
    /// All time blocks in canonical order (morning first).
    pub const ALL: [TimeBlock; 3] = [TimeBlock::Morning, TimeBlock::Afternoon, TimeBlock::Evening];

    /// Position in canonical order (0-2).
    pub fn index(self) -> usize {
        match self {
            TimeBlock::Morning => 0,
            TimeBlock::Afternoon => 1,
            TimeBlock::Evening => 2,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeBlock::Morning => "morning",
            TimeBlock::Afternoon => "afternoon",
            TimeBlock::Evening => "evening",
        }
    }

    /// Block containing the given hour of day (0-23).
    ///
    /// Hours past 23 are folded into the evening block.
    pub fn from_hour(hour: u32) -> TimeBlock {
        match hour {
            0..=11 => TimeBlock::Morning,
            12..=16 => TimeBlock::Afternoon,
            _ => TimeBlock::Evening,
        }
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBlock {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" | "mor" | "am" => Ok(TimeBlock::Morning),
            "afternoon" | "aft" | "noon" => Ok(TimeBlock::Afternoon),
            "evening" | "eve" | "pm" => Ok(TimeBlock::Evening),
            _ => Err(ParseError::UnknownTimeBlock(s.to_string())),
        }
    }
}

/// Self-reported energy level (1=Rest .. 4=High).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergyLevel {
    Rest = 1,
    Low = 2,
    Good = 3,
    High = 4,
}

impl EnergyLevel {
    /// All levels in ascending order.
    pub const ALL: [EnergyLevel; 4] = [
        EnergyLevel::Rest,
        EnergyLevel::Low,
        EnergyLevel::Good,
        EnergyLevel::High,
    ];

    /// Ordinal score used for averaging (1-4).
    pub fn score(self) -> u8 {
        self as u8
    }

    /// Level for a score (1-4), `None` otherwise.
    pub fn from_score(score: u8) -> Option<EnergyLevel> {
        match score {
            1 => Some(EnergyLevel::Rest),
            2 => Some(EnergyLevel::Low),
            3 => Some(EnergyLevel::Good),
            4 => Some(EnergyLevel::High),
            _ => None,
        }
    }

    /// Plain label.
    pub fn label(self) -> &'static str {
        match self {
            EnergyLevel::Rest => "Rest",
            EnergyLevel::Low => "Low",
            EnergyLevel::Good => "Good",
            EnergyLevel::High => "High",
        }
    }

    /// Label with the emoji prefix used by the selection controls.
    pub fn emoji_label(self) -> &'static str {
        match self {
            EnergyLevel::Rest => "🔋 Rest",
            EnergyLevel::Low => "💫 Low",
            EnergyLevel::Good => "✨ Good",
            EnergyLevel::High => "⚡️ High",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnergyLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "rest" => Ok(EnergyLevel::Rest),
            "2" | "low" => Ok(EnergyLevel::Low),
            "3" | "good" => Ok(EnergyLevel::Good),
            "4" | "high" => Ok(EnergyLevel::High),
            _ => Err(ParseError::UnknownEnergyLevel(s.to_string())),
        }
    }
}
