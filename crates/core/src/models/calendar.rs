use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Administrator-configured calendar for one academic year.
///
/// Week counts default to the common 8/8/10/8 split when the record omits
/// them. At most one year is active system-wide; that bookkeeping lives in
/// the academic-year service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub start_date: NaiveDate,
    #[serde(default = "default_short_quarter")]
    pub quarter1_weeks: u32,
    #[serde(default = "default_short_quarter")]
    pub quarter2_weeks: u32,
    #[serde(default = "default_long_quarter")]
    pub quarter3_weeks: u32,
    #[serde(default = "default_short_quarter")]
    pub quarter4_weeks: u32,
}

fn default_short_quarter() -> u32 {
    8
}

fn default_long_quarter() -> u32 {
    10
}

impl AcademicYear {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            quarter1_weeks: default_short_quarter(),
            quarter2_weeks: default_short_quarter(),
            quarter3_weeks: default_long_quarter(),
            quarter4_weeks: default_short_quarter(),
        }
    }

    /// Week counts in quarter order, floored at one week.
    pub fn week_counts(&self) -> [u32; 4] {
        [
            self.quarter1_weeks,
            self.quarter2_weeks,
            self.quarter3_weeks,
            self.quarter4_weeks,
        ]
        .map(|w| w.max(1))
    }
}

/// One quarter's inclusive date span, derived from an [`AcademicYear`] on
/// every query and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterRange {
    pub quarter: u8,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QuarterRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Splits the year into four contiguous quarters: quarter `i` spans
/// `weeks[i] * 7` days, ending the day before the next quarter starts.
pub fn quarter_ranges(year: &AcademicYear) -> [QuarterRange; 4] {
    let weeks = year.week_counts();
    let mut start = year.start_date;
    let mut ranges = [QuarterRange {
        quarter: 0,
        start,
        end: start,
    }; 4];
    for (i, range) in ranges.iter_mut().enumerate() {
        let end = start + Duration::days(i64::from(weeks[i]) * 7 - 1);
        *range = QuarterRange {
            quarter: i as u8 + 1,
            start,
            end,
        };
        start = end + Duration::days(1);
    }
    ranges
}

/// Finds the quarter whose inclusive range contains `date`.
pub fn classify(date: NaiveDate, ranges: &[QuarterRange; 4]) -> Option<u8> {
    ranges
        .iter()
        .find(|range| range.contains(date))
        .map(|range| range.quarter)
}

/// Quarter number `date` falls in for `year`, if any.
pub fn quarter_on(year: &AcademicYear, date: NaiveDate) -> Option<u8> {
    classify(date, &quarter_ranges(year))
}

/// Quarter number today falls in, evaluated at call time.
///
/// `None` when no year is configured or today is outside the year (summer);
/// callers treat that as a normal state, not a failure.
pub fn current_quarter(year: Option<&AcademicYear>) -> Option<u8> {
    year.and_then(|year| quarter_on(year, Local::now().date_naive()))
}
