use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wall-clock time of day, minute resolution.
///
/// Parsing is deliberately forgiving: the schedule editor always needs a
/// usable value, so malformed input falls back to 09:00 instead of erroring,
/// and out-of-range components are clamped. The canonical rendering is
/// zero-padded `HH:MM`; seconds are accepted on input but never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Baseline start for a freshly added slot.
    pub const DEFAULT_START: TimeOfDay = TimeOfDay { hour: 9, minute: 0 };

    /// Baseline end for a freshly added slot.
    pub const DEFAULT_END: TimeOfDay = TimeOfDay { hour: 10, minute: 30 };

    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Parses `H:MM`, `HH:MM` or `HH:MM:SS`; seconds are ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split(':');
        let hour = parts.next()?.parse::<u8>().ok()?;
        let minute = parts.next()?.parse::<u8>().ok()?;
        if let Some(seconds) = parts.next() {
            seconds.parse::<u8>().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(hour, minute))
    }

    /// Parses like [`TimeOfDay::parse`], falling back to 09:00 so the editor
    /// always has a value to show.
    pub fn parse_or_default(text: &str) -> Self {
        Self::parse(text).unwrap_or(Self::DEFAULT_START)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// A slot must end strictly after it starts; zero-length and overnight
    /// ranges are rejected.
    pub fn is_valid_range(start: TimeOfDay, end: TimeOfDay) -> bool {
        end.minutes_since_midnight() > start.minutes_since_midnight()
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::DEFAULT_START
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&text))
    }
}
