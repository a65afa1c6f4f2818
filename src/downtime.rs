//! Conversion of an uptime target into the downtime it allows.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts::{MAX_UPTIME_PERCENT, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::prelude::*;

/// Allowed downtime, broken down into days, hours, minutes and seconds.
///
/// `days` keeps its fractional part. Every finer unit holds what remains
/// after the coarser one was taken out, so `hours < 24`, `minutes < 60`
/// and `seconds < 60` for any non-negative downtime.
#[derive(Debug, Clone, Copy, PartialEq, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{days} days {hours} hours {minutes} minutes {seconds} seconds")]
pub struct Downtime {
    pub days:    f64,
    pub hours:   f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Downtime {
    /// Reassembles the breakdown into a single number of seconds.
    ///
    /// Equal to the downtime it was computed from, up to floating-point error.
    pub fn total_seconds(&self) -> f64 {
        self.days.trunc() * SECONDS_PER_DAY
            + self.hours.trunc() * SECONDS_PER_HOUR
            + self.minutes.trunc() * SECONDS_PER_MINUTE
            + self.seconds
    }

    /// Each field truncated toward zero, as shown in the rounded report
    #[allow(clippy::cast_possible_truncation)]
    pub fn whole_units(&self) -> (i64, i64, i64, i64) {
        (
            self.days as i64,
            self.hours as i64,
            self.minutes as i64,
            self.seconds as i64,
        )
    }
}

/// Computes the downtime allowed by `uptime_percent` over a year of
/// `total_seconds_in_year` seconds.
///
/// The caller is expected to pass `0 <= uptime_percent <= 100` and a positive
/// year length. Out-of-range percentages are not rejected here; they produce
/// a negative or larger-than-a-year downtime.
pub fn calculate_downtime(uptime_percent: f64, total_seconds_in_year: f64) -> Downtime {
    let downtime_percent = MAX_UPTIME_PERCENT - uptime_percent;
    let total_downtime = total_seconds_in_year * downtime_percent / MAX_UPTIME_PERCENT;

    // `%` on f64 is fmod: the remainder takes the sign of the dividend
    let days = total_downtime / SECONDS_PER_DAY;
    let mut remaining = total_downtime % SECONDS_PER_DAY;

    let hours = remaining / SECONDS_PER_HOUR;
    remaining %= SECONDS_PER_HOUR;

    let minutes = remaining / SECONDS_PER_MINUTE;
    remaining %= SECONDS_PER_MINUTE;

    trace!(uptime_percent, total_downtime, "computed downtime");

    Downtime {
        days,
        hours,
        minutes,
        seconds: remaining,
    }
}
