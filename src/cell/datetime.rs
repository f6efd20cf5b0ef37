//! Serial-day conversion for date and time values.
//!
//! Spreadsheet files store dates as floating-point day counts since
//! 1899-12-30. Serials below 61 are shifted down by one day because the
//! format inherits the Lotus 1-2-3 bug that treats 1900 as a leap year;
//! serial 60 is the phantom 1900-02-29. The offsets here are pinned
//! against known (calendar date, serial) pairs, not derived.

use chrono::{Datelike, NaiveDate, Timelike};

/// Seconds per day, the denominator of every time fraction.
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

const EPOCH_YMD: (i32, u32, u32) = (1899, 12, 30);

/// First serial unaffected by the phantom leap day (1900-03-01).
const FIRST_POST_BUG_SERIAL: i64 = 61;

/// A calendar date without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A time of day with microsecond precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

/// A calendar date with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

/// An elapsed duration, not anchored to the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeDelta {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Date { year, month, day }
    }

    /// Whole days since the 1899-12-30 epoch, with the pre-1900-03-01
    /// range shifted down one day for the phantom leap day.
    pub fn to_serial(self) -> f64 {
        let base = NaiveDate::from_ymd_opt(EPOCH_YMD.0, EPOCH_YMD.1, EPOCH_YMD.2)
            .unwrap_or(NaiveDate::MIN);
        let days = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .map(|date| (date - base).num_days())
            .unwrap_or(0);
        let days = if days < FIRST_POST_BUG_SERIAL {
            days - 1
        } else {
            days
        };
        days as f64
    }

    /// Inverse of [`Date::to_serial`]. The phantom serial 60 maps to
    /// 1900-02-28, the last real day before the gap.
    pub fn from_serial(serial: f64) -> Option<Date> {
        let serial_days = serial.floor() as i64;
        let days = if serial_days < FIRST_POST_BUG_SERIAL {
            // +1 undoes the bug shift; the phantom serial 60 clamps to
            // the last real day before the gap.
            (serial_days + 1).min(60)
        } else {
            serial_days
        };
        let base = NaiveDate::from_ymd_opt(EPOCH_YMD.0, EPOCH_YMD.1, EPOCH_YMD.2)?;
        let date = base.checked_add_signed(chrono::Duration::days(days))?;
        Some(Date::new(date.year(), date.month(), date.day()))
    }
}

impl Time {
    pub fn new(hour: u32, minute: u32, second: u32, microsecond: u32) -> Self {
        Time {
            hour,
            minute,
            second,
            microsecond,
        }
    }

    fn seconds_of_day(self) -> f64 {
        f64::from(self.hour * 3600 + self.minute * 60 + self.second)
            + f64::from(self.microsecond) / 1_000_000.0
    }

    /// Fraction of a day in [0, 1).
    pub fn to_serial(self) -> f64 {
        self.seconds_of_day() / SECONDS_PER_DAY
    }

    /// Time of day from the fractional part of a serial.
    pub fn from_serial(serial: f64) -> Time {
        let seconds = serial.fract().abs() * SECONDS_PER_DAY;
        let whole = seconds as u32;
        Time {
            hour: whole / 3600,
            minute: whole % 3600 / 60,
            second: whole % 60,
            microsecond: ((seconds - f64::from(whole)) * 1_000_000.0).round() as u32,
        }
    }
}

impl DateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        DateTime {
            date: Date::new(year, month, day),
            time: Time::new(hour, minute, second, 0),
        }
    }

    /// Day count plus time fraction.
    pub fn to_serial(self) -> f64 {
        self.date.to_serial() + self.time.to_serial()
    }
}

impl TimeDelta {
    pub fn new(days: i64, hours: i64, minutes: i64, seconds: i64, microseconds: i64) -> Self {
        TimeDelta {
            days,
            hours,
            minutes,
            seconds,
            microseconds,
        }
    }

    /// Elapsed days as a floating value; no epoch involved.
    pub fn to_serial(self) -> f64 {
        self.days as f64
            + (self.hours as f64 * 3600.0
                + self.minutes as f64 * 60.0
                + self.seconds as f64
                + self.microseconds as f64 / 1_000_000.0)
                / SECONDS_PER_DAY
    }
}

/// Convert a chrono date, mainly a convenience for callers that already
/// hold one.
impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(date.year(), date.month(), date.day())
    }
}

impl From<chrono::NaiveTime> for Time {
    fn from(time: chrono::NaiveTime) -> Self {
        Time::new(
            time.hour(),
            time.minute(),
            time.second(),
            time.nanosecond() / 1_000,
        )
    }
}
