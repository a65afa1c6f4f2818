//! Validated uptime percentages and the fallback to the default targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::{DEFAULT_UPTIMES, MAX_UPTIME_PERCENT, MIN_UPTIME_PERCENT};

/// Error type for uptime argument validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UptimeError {
    /// Argument is not a number.
    #[error("invalid parameter type: {0}")]
    InvalidType(String),

    /// Argument is a number outside `0..=100`.
    #[error("invalid parameter value: {0}")]
    InvalidValue(String),
}

/// An uptime percentage guaranteed to be in the range `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UptimePercentage(f64);

impl UptimePercentage {
    /// Creates a new `UptimePercentage`, validating that it's within `0..=100`
    ///
    /// # Errors
    /// Returns `UptimeError::InvalidValue` if the value is NaN or out of range.
    pub fn new(value: f64) -> Result<Self, UptimeError> {
        if (MIN_UPTIME_PERCENT..=MAX_UPTIME_PERCENT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(UptimeError::InvalidValue(value.to_string()))
        }
    }

    /// Returns the percentage as f64
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UptimePercentage {
    type Error = UptimeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UptimePercentage> for f64 {
    fn from(uptime: UptimePercentage) -> Self {
        uptime.0
    }
}

impl FromStr for UptimePercentage {
    type Err = UptimeError;

    /// Errors carry the argument exactly as given, so messages point at what
    /// the user typed rather than at the parsed float.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| UptimeError::InvalidType(s.to_owned()))?;
        Self::new(value).map_err(|_| UptimeError::InvalidValue(s.to_owned()))
    }
}

impl fmt::Display for UptimePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The percentiles used when no usable targets are supplied
pub fn default_uptimes() -> Vec<UptimePercentage> {
    DEFAULT_UPTIMES.into_iter().map(UptimePercentage).collect()
}

/// Parses every argument in order.
///
/// # Errors
/// Returns the first argument's error; a single bad argument discards the
/// whole list.
pub fn parse_uptimes<I, S>(args: I) -> Result<Vec<UptimePercentage>, UptimeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().map(|arg| arg.as_ref().parse()).collect()
}

/// Uptime targets to report on, plus the validation error that forced a
/// fallback to the defaults, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUptimes {
    pub uptimes: Vec<UptimePercentage>,
    pub error:   Option<UptimeError>,
}

/// Resolves user arguments into the targets to report on.
///
/// Falls back to [`default_uptimes`] when an argument is invalid or when no
/// arguments were given. Never fails.
pub fn resolve_uptimes<I, S>(args: I) -> ResolvedUptimes
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match parse_uptimes(args) {
        Ok(uptimes) if !uptimes.is_empty() => {
            debug!(count = uptimes.len(), "using supplied uptime targets");
            ResolvedUptimes {
                uptimes,
                error: None,
            }
        },
        Ok(_) => {
            debug!("no uptime targets supplied, using defaults");
            ResolvedUptimes {
                uptimes: default_uptimes(),
                error:   None,
            }
        },
        Err(err) => {
            info!(%err, "falling back to default uptime targets");
            ResolvedUptimes {
                uptimes: default_uptimes(),
                error:   Some(err),
            }
        },
    }
}
