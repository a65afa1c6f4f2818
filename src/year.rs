//! Year length under the Gregorian leap-year rule.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    SECONDS_PER_DAY,
};

/// Returns whether `year` is a leap year.
///
/// Year 0 is never a leap year. Remainders use Rust's truncating `%` and are
/// tested with `> 0`, so a negative year yields a non-positive remainder and
/// falls through to "leap". This matches the reference outputs for negative
/// years rather than the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    if year == 0 || year % LEAP_YEAR_CYCLE > 0 {
        return false;
    }
    !(year % CENTURY_CYCLE == 0 && year % GREGORIAN_CYCLE > 0)
}

/// Number of days in `year` (365 or 366)
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Total seconds in `year`, the basis every downtime is computed against
pub fn seconds_in_year(year: i32) -> f64 {
    f64::from(days_in_year(year)) * SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 4,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2300,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: false,
                description: "year zero",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_every_400th_year_is_leap() {
        for year in (400..=10_000).step_by(400) {
            assert!(is_leap_year(year), "Year {year} should be a leap year");
        }
    }

    #[test]
    fn test_centuries_off_the_gregorian_cycle_are_common() {
        for year in (100..=10_000).step_by(100).filter(|y| y % 400 != 0) {
            assert!(!is_leap_year(year), "Year {year} should not be a leap year");
        }
    }

    #[test]
    fn test_negative_years_use_truncating_remainder() {
        // -1 % 4 == -1, which is not > 0
        assert!(is_leap_year(-1));
        assert!(is_leap_year(-4));
        // -100 % 400 == -100, which is not > 0
        assert!(is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(0), 365);
    }

    #[test]
    fn test_seconds_in_year() {
        assert_eq!(seconds_in_year(2023), 31_536_000.0);
        assert_eq!(seconds_in_year(2024), 31_622_400.0);
    }
}
