//! Allowed yearly downtime for uptime percentage targets.
//!
//! Given a calendar year and an uptime target such as 99.9%, computes the
//! downtime that target still permits, broken down into days, hours,
//! minutes and seconds.

mod consts;
mod downtime;
mod prelude;
mod report;
mod uptime;
mod year;

pub use consts::*;
pub use downtime::{Downtime, calculate_downtime};
pub use report::{Entry, OutputMode, Report, fallback_notice};
pub use uptime::{
    ResolvedUptimes, UptimeError, UptimePercentage, default_uptimes, parse_uptimes,
    resolve_uptimes,
};
pub use year::{days_in_year, is_leap_year, seconds_in_year};

/// Downtime allowed by `uptime` over the whole of `year`
pub fn downtime_for_year(year: i32, uptime: UptimePercentage) -> Downtime {
    calculate_downtime(uptime.get(), seconds_in_year(year))
}
