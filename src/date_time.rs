//! Value types for picker selections.
//!
//! ## Usage
//!
//! [`PickerDateTime`] is the absolute value carried by date and time pickers;
//! [`CountdownValue`] is the elapsed-duration value carried by countdown
//! pickers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// A civil date and wall-clock time, minute resolution.
///
/// Field order gives chronological ordering, so values compare directly for
/// bound checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PickerDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl PickerDateTime {
    /// Creates a date/time value if the components are valid.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Returns the current date and time in UTC, truncated to whole minutes.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = duration.as_secs();
        let (year, month, day) = civil_from_days((secs / 86_400) as i64);
        let hour = ((secs / SECONDS_PER_HOUR) % 24) as u8;
        let minute = ((secs / SECONDS_PER_MINUTE) % 60) as u8;
        PickerDateTime::new(year, month, day, hour, minute)
            .unwrap_or_else(|| Self::new_unchecked(1970, 1, 1, 0, 0))
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the value with the day stepped, wrapping within the month.
    pub fn step_day(&self, delta: i32) -> Self {
        let max_day = days_in_month(self.year, self.month) as i32;
        let day = (self.day as i32 - 1 + delta).rem_euclid(max_day) + 1;
        Self {
            day: day as u8,
            ..*self
        }
    }

    /// Returns the value with the month stepped, wrapping within the year and
    /// clamping the day to the target month's length.
    pub fn step_month(&self, delta: i32) -> Self {
        let month = ((self.month as i32 - 1 + delta).rem_euclid(12) + 1) as u8;
        let day = self.day.min(days_in_month(self.year, month));
        Self {
            month,
            day,
            ..*self
        }
    }

    /// Returns the value with the year stepped, clamping the day for leap
    /// years.
    pub fn step_year(&self, delta: i32) -> Self {
        let year = self.year.saturating_add(delta);
        let day = self.day.min(days_in_month(year, self.month));
        Self { year, day, ..*self }
    }

    /// Returns the value with the hour stepped, wrapping at 24.
    pub fn step_hour(&self, delta: i32) -> Self {
        let hour = (self.hour as i32 + delta).rem_euclid(24) as u8;
        Self { hour, ..*self }
    }

    /// Returns the value with the minute stepped, wrapping at 60.
    pub fn step_minute(&self, delta: i32) -> Self {
        let minute = (self.minute as i32 + delta).rem_euclid(60) as u8;
        Self { minute, ..*self }
    }

    fn new_unchecked(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

/// An elapsed duration shown as whole hours and minutes.
///
/// This matches the native resolution of a countdown wheel: anything below
/// one minute is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CountdownValue {
    hours: u8,
    minutes: u8,
}

impl CountdownValue {
    /// Creates a countdown value, clamping hours to 0-23 and minutes to 0-59.
    pub fn new(hours: u8, minutes: u8) -> Self {
        Self {
            hours: hours.min(23),
            minutes: minutes.min(59),
        }
    }

    /// Converts a duration into displayed hours and minutes.
    ///
    /// The seconds remainder below one minute is truncated; durations of a
    /// day or more clamp to 23 h 59 m.
    pub fn from_duration(duration: Duration) -> Self {
        let secs = duration.as_secs();
        let hours = secs / SECONDS_PER_HOUR;
        let minutes = (secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        if hours > 23 {
            return Self {
                hours: 23,
                minutes: 59,
            };
        }
        Self {
            hours: hours as u8,
            minutes: minutes as u8,
        }
    }

    /// Returns the displayed duration in whole minutes.
    pub fn to_duration(self) -> Duration {
        Duration::from_secs(
            self.hours as u64 * SECONDS_PER_HOUR + self.minutes as u64 * SECONDS_PER_MINUTE,
        )
    }

    /// Returns the hours component (0-23).
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Returns the minutes component (0-59).
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns the value with the hours stepped, wrapping at 24.
    pub fn step_hours(&self, delta: i32) -> Self {
        let hours = (self.hours as i32 + delta).rem_euclid(24) as u8;
        Self { hours, ..*self }
    }

    /// Returns the value with the minutes stepped by the given interval,
    /// wrapping at 60.
    ///
    /// Minutes snap onto the interval grid first, so a value between two
    /// grid points moves to the next grid point in the step direction.
    pub fn step_minutes(&self, delta: i32, interval: u32) -> Self {
        let interval = normalize_minute_interval(interval) as i32;
        let minutes = self.minutes as i32;
        let slot = if delta >= 0 {
            minutes / interval + delta
        } else {
            // Round up so that off-grid values move down to the previous
            // grid point, not past it.
            (minutes + interval - 1) / interval + delta
        };
        let minutes = (slot * interval).rem_euclid(60) as u8;
        Self { minutes, ..*self }
    }
}

/// Quantizes the minute interval into the range a minute wheel supports.
pub(crate) fn normalize_minute_interval(interval: u32) -> u32 {
    interval.clamp(1, 30)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}
