use clap::Parser;

/// Allowed yearly downtime for uptime percentage targets.
#[derive(Parser)]
#[command(
    name = "uptime-calculator",
    version,
    about = "Converts uptime percentage targets into the allowed yearly downtime"
)]
pub struct Cli {
    /// Year to compute for; defaults to the current year.
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Print every field with full precision instead of whole units.
    #[arg(long)]
    pub debug: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Uptime percentages in 0..=100; invalid input falls back to the defaults.
    #[arg(allow_negative_numbers = true)]
    pub uptimes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["uptime-calculator"]).unwrap();
        assert_eq!(cli.year, None);
        assert!(!cli.debug);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(cli.uptimes.is_empty());
    }

    #[test]
    fn test_flags_and_uptimes() {
        let cli = Cli::try_parse_from([
            "uptime-calculator",
            "--year",
            "2024",
            "--debug",
            "-vv",
            "99.5",
            "-3",
            "abc",
        ])
        .unwrap();
        assert_eq!(cli.year, Some(2024));
        assert!(cli.debug);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.uptimes, ["99.5", "-3", "abc"]);
    }

    #[test]
    fn test_negative_year() {
        let cli = Cli::try_parse_from(["uptime-calculator", "--year", "-44"]).unwrap();
        assert_eq!(cli.year, Some(-44));
    }
}
