use anyhow::Context;
use clap::Parser;
use hybrid_leaderboard::cli::args::{Args, Commands};
use hybrid_leaderboard::cli::commands;
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    let args = Args::parse();

    // Without a subcommand, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    if let Err(error) = run(command) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime.block_on(async {
        let cancellation_token = CancellationToken::new();

        let signal_token = cancellation_token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\nReceived CTRL+C, shutting down...");
                signal_token.cancel();
            }
        });

        // Watch winds down on the token itself; one-shot commands are abandoned
        if matches!(command, Commands::Watch(_)) {
            return commands::run(command, cancellation_token)
                .await
                .context("Watch failed");
        }

        tokio::select! {
            result = commands::run(command, cancellation_token.clone()) => {
                result.context("Command failed")
            }
            _ = cancellation_token.cancelled() => {
                Err(hybrid_leaderboard::Error::processing_interrupted("interrupted by user").into())
            }
        }
    })
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Hybrid Leaderboard - Competition Results Ranking");
    println!("================================================");
    println!();
    println!("Reads the results sheet of a hybrid fitness competition and recomputes");
    println!("overall, category and per-segment rankings.");
    println!();
    println!("USAGE:");
    println!("    hybrid-leaderboard <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    leaderboard   Print the leaderboard table");
    println!("    participant   Show the ranked view of one participant");
    println!("    segment       Show statistics and podiums of one segment");
    println!("    categories    List the competition categories");
    println!("    watch         Refresh periodically until CTRL+C");
    println!();
    println!("EXAMPLES:");
    println!("    # Leaderboard of one category from a local export:");
    println!("    hybrid-leaderboard leaderboard --input results.json --category rx-masculino");
    println!();
    println!("    # Fastest finishers of the first segment, as JSON:");
    println!("    hybrid-leaderboard segment 0 --format json");
    println!();
    println!("    # Live updates from the sheet every 30 seconds:");
    println!("    HYBRID_LEADERBOARD_API_KEY=... HYBRID_LEADERBOARD_SHEET_ID=... \\");
    println!("        hybrid-leaderboard watch --interval 30");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hybrid-leaderboard <COMMAND> --help");
}
