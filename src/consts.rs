/// Seconds in one minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;
/// Minutes in one hour
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Hours in one day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seconds in one hour (3600)
pub const SECONDS_PER_HOUR: f64 = MINUTES_PER_HOUR * SECONDS_PER_MINUTE;
/// Seconds in one day (86400)
pub const SECONDS_PER_DAY: f64 = HOURS_PER_DAY * SECONDS_PER_HOUR;

/// Days in a common (non-leap) year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Lowest accepted uptime percentage (inclusive)
pub const MIN_UPTIME_PERCENT: f64 = 0.0;
/// Highest accepted uptime percentage (inclusive)
pub const MAX_UPTIME_PERCENT: f64 = 100.0;

/// Percentiles reported when no usable targets are supplied
pub const DEFAULT_UPTIMES: [f64; 6] = [99.0, 99.9, 99.99, 99.999, 99.9999, 99.99999];
