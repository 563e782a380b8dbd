// Day module
// Days of the displayed week, in column order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the week. Declaration order is column order, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Column order of the week grid. Shared by everything that maps a day to a column.
pub const DAY_ORDER: [Day; 7] = [
    Day::Sunday,
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
    Day::Saturday,
];

impl Day {
    /// Column index of this day in [`DAY_ORDER`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Day> {
        DAY_ORDER.get(index).copied()
    }

    /// The following day within the same week. Saturday has none.
    pub fn successor(self) -> Option<Day> {
        Day::from_index(self.index() + 1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Three-letter label used for column headers
    pub fn short_name(self) -> &'static str {
        &self.as_str()[..3]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DAY_ORDER
            .iter()
            .copied()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown day: {}", s))
    }
}
