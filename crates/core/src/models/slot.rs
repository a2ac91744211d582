use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

/// One weekly recurring meeting of a teaching group.
///
/// `id` is assigned by the storage service; client-created slots carry `None`
/// until saved. A missing `quarter` means the slot applies in every quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    #[serde(default)]
    pub id: Option<i64>,
    pub day_of_week: u8,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub quarter: Option<u8>,
}

impl ScheduleSlot {
    pub fn has_valid_times(&self) -> bool {
        TimeOfDay::is_valid_range(self.start_time, self.end_time)
    }
}

/// Display name for a day index, 0 = Monday through 6 = Sunday.
pub fn day_name(day_of_week: u8) -> &'static str {
    match day_of_week {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        6 => "Sunday",
        _ => "Unknown",
    }
}
