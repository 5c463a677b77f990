//! Command-line argument definitions for the hybrid leaderboard
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand shares the data-source, configuration and logging flags.

use crate::app::services::leaderboard_query::{LeaderboardQuery, SortDirection, SortField};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the hybrid competition leaderboard
///
/// Reads the published results sheet, recomputes every ranking and prints
/// leaderboards, participant detail and per-segment statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hybrid-leaderboard",
    version,
    about = "Rank hybrid fitness competition results published as a spreadsheet",
    long_about = "Ingests the fixed-layout results sheet of a multi-segment hybrid fitness \
                  competition, recomputes overall, category and per-segment rankings, and \
                  prints leaderboards, participant detail and segment statistics. The sheet \
                  is fetched from the spreadsheet values API or read from a local JSON export."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the leaderboard table
    Leaderboard(LeaderboardArgs),
    /// Show the ranked view of one participant
    Participant(ParticipantArgs),
    /// Show statistics and podiums of one segment
    Segment(SegmentArgs),
    /// List the competition categories
    Categories(CategoriesArgs),
    /// Refresh periodically and report each new dataset
    Watch(WatchArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Read the table from a JSON value-range export instead of the sheet
    ///
    /// The file holds `{"values": [[...], ...]}` as returned by the spreadsheet
    /// values API. Without it the sheet is fetched using the configuration.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Read the results table from a JSON export"
    )]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file with the data-source credentials. If not
    /// specified, looks for <config dir>/hybrid-leaderboard/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }
}

/// Arguments for the leaderboard command
#[derive(Debug, Clone, Parser)]
pub struct LeaderboardArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only show one category (see `categories` for ids)
    #[arg(long = "category", value_name = "ID")]
    pub category: Option<String>,

    /// Only show names containing this text (case-insensitive)
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort column: position, name, total or segment:<index>
    #[arg(long = "sort", value_name = "FIELD", default_value = "position")]
    pub sort: SortField,

    /// Sort in descending order
    #[arg(long = "desc")]
    pub descending: bool,

    /// Show at most this many rows
    #[arg(short = 'n', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,
}

impl LeaderboardArgs {
    /// Build the table query from the flags
    pub fn query(&self) -> LeaderboardQuery {
        let direction = if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        LeaderboardQuery {
            category: self.category.clone(),
            search: self.search.clone(),
            sort: self.sort,
            direction,
        }
    }
}

/// Arguments for the participant command
#[derive(Debug, Clone, Parser)]
pub struct ParticipantArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Participant id (`p12`), or the bare sheet row (`12`)
    #[arg(value_name = "ID")]
    pub id: String,
}

impl ParticipantArgs {
    /// Participant id with the row prefix added to bare numbers
    pub fn participant_id(&self) -> String {
        let id = self.id.trim();
        if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
            format!("{}{}", crate::constants::PARTICIPANT_ID_PREFIX, id)
        } else {
            id.to_string()
        }
    }
}

/// Arguments for the segment command
#[derive(Debug, Clone, Parser)]
pub struct SegmentArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Segment index, starting at 0
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Arguments for the categories command
#[derive(Debug, Clone, Parser)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the watch command
#[derive(Debug, Clone, Parser)]
pub struct WatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Seconds between refreshes (overrides the configuration)
    #[arg(long = "interval", value_name = "SECS")]
    pub interval_secs: Option<u64>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_leaderboard_args() {
        let args = parse(&[
            "hybrid-leaderboard",
            "leaderboard",
            "--category",
            "rx-masculino",
            "--sort",
            "segment:2",
            "--desc",
            "-vv",
        ]);

        let Some(Commands::Leaderboard(leaderboard)) = args.command else {
            panic!("expected leaderboard command");
        };
        let query = leaderboard.query();
        assert_eq!(query.category.as_deref(), Some("rx-masculino"));
        assert_eq!(query.sort, SortField::Segment(2));
        assert_eq!(query.direction, SortDirection::Descending);
        assert_eq!(leaderboard.common.get_log_level(), "debug");
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        assert!(
            Args::try_parse_from(["hybrid-leaderboard", "leaderboard", "--sort", "rank"]).is_err()
        );
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["hybrid-leaderboard", "categories", "-q", "-v"]).is_err());

        let args = parse(&["hybrid-leaderboard", "categories", "-q", "--format", "json"]);
        let Some(Commands::Categories(categories)) = args.command else {
            panic!("expected categories command");
        };
        assert_eq!(categories.common.get_log_level(), "error");
        assert!(categories.common.is_json());
    }

    #[test]
    fn test_participant_id_normalization() {
        let args = parse(&["hybrid-leaderboard", "participant", "12"]);
        let Some(Commands::Participant(participant)) = args.command else {
            panic!("expected participant command");
        };
        assert_eq!(participant.participant_id(), "p12");

        let args = parse(&["hybrid-leaderboard", "participant", "p7"]);
        let Some(Commands::Participant(participant)) = args.command else {
            panic!("expected participant command");
        };
        assert_eq!(participant.participant_id(), "p7");
    }

    #[test]
    fn test_no_subcommand() {
        assert!(parse(&["hybrid-leaderboard"]).command.is_none());
    }
}
