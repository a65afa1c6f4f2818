//! Text and JSON presentation of downtime results for one year.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::debug;

use crate::consts::DEFAULT_UPTIMES;
use crate::downtime::{Downtime, calculate_downtime};
use crate::uptime::{UptimeError, UptimePercentage};
use crate::year::{days_in_year, seconds_in_year};

/// How downtime fields are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every field truncated to a whole number
    #[default]
    Rounded,
    /// Every field with six decimals
    Precise,
}

/// One uptime target and the downtime it allows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entry {
    pub uptime:   UptimePercentage,
    pub downtime: Downtime,
}

impl Entry {
    /// Renders `"<uptime>% is: <d> days <h> hours <m> minutes <s> seconds"`
    pub fn render(&self, mode: OutputMode) -> String {
        let uptime = self.uptime.get();
        match mode {
            OutputMode::Rounded => {
                let (days, hours, minutes, seconds) = self.downtime.whole_units();
                format!(
                    "{uptime:.6}% is: {days} days {hours} hours {minutes} minutes {seconds} seconds"
                )
            },
            OutputMode::Precise => {
                let Downtime {
                    days,
                    hours,
                    minutes,
                    seconds,
                } = self.downtime;
                format!(
                    "{uptime:.6}% is: {days:.6} days {hours:.6} hours {minutes:.6} minutes {seconds:.6} seconds"
                )
            },
        }
    }
}

/// Allowed downtime for a list of uptime targets within one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub year:         i32,
    pub days_in_year: u16,
    pub entries:      Vec<Entry>,
}

impl Report {
    /// Computes the year length once, then one entry per target in order.
    pub fn new(year: i32, uptimes: &[UptimePercentage]) -> Self {
        let days = days_in_year(year);
        let total_seconds = seconds_in_year(year);
        debug!(year, days, total_seconds, "resolved year length");

        let entries = uptimes
            .iter()
            .map(|&uptime| Entry {
                uptime,
                downtime: calculate_downtime(uptime.get(), total_seconds),
            })
            .collect();

        Self {
            year,
            days_in_year: days,
            entries,
        }
    }

    pub fn header(&self) -> String {
        format!(
            "Calculated allowed downtime for uptime requirement in year: {} ({:.6} days):",
            self.year,
            f64::from(self.days_in_year)
        )
    }

    /// Header line followed by one tab-indented line per entry
    pub fn render(&self, mode: OutputMode) -> String {
        let mut out = self.header();
        out.push('\n');
        for entry in &self.entries {
            // Writing to a String cannot fail
            let _ = writeln!(out, "\t{}", entry.render(mode));
        }
        out
    }
}

/// Message shown when invalid arguments were replaced by the defaults
pub fn fallback_notice(err: &UptimeError) -> String {
    let defaults = DEFAULT_UPTIMES
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Error: {err}\n\tContinuing with the known defaults [{defaults}]\n")
}
