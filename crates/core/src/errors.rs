use std::fmt;

use thiserror::Error;

use crate::models::slot::day_name;
use crate::models::time::TimeOfDay;

/// A slot that failed time-range validation, identified well enough for the
/// user to find and fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlot {
    pub index: usize,
    pub day_of_week: u8,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl fmt::Display for InvalidSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot {} ({} {}-{})",
            self.index + 1,
            day_name(self.day_of_week),
            self.start_time,
            self.end_time
        )
    }
}

fn list_invalid(slots: &[InvalidSlot]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: end time must be after start time for {}", list_invalid(.0))]
    InvalidTimeRanges(Vec<InvalidSlot>),

    #[error("Sync failed at operation {index} ({operation}): {source}")]
    SyncFailed {
        index: usize,
        operation: String,
        source: eyre::Report,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
