//! Command implementations for the hybrid leaderboard CLI
//!
//! Each command lives in its own module and shares logging, configuration and
//! data-source handling through [`shared`].

pub mod categories;
pub mod leaderboard;
pub mod participant;
pub mod segment;
pub mod shared;
pub mod watch;

use crate::Result;
use crate::cli::args::Commands;
use tokio_util::sync::CancellationToken;

/// Main command runner
///
/// Dispatches to the subcommand handler. Only `watch` runs until cancelled; the
/// other commands finish after a single fetch.
pub async fn run(command: Commands, cancel: CancellationToken) -> Result<()> {
    match command {
        Commands::Leaderboard(args) => leaderboard::run_leaderboard(args).await,
        Commands::Participant(args) => participant::run_participant(args).await,
        Commands::Segment(args) => segment::run_segment(args).await,
        Commands::Categories(args) => categories::run_categories(args).await,
        Commands::Watch(args) => watch::run_watch(args, cancel).await,
    }
}
