mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::economics::{AnalyzeArgs, MultipleArgs, OwnershipArgs, ScenariosArgs, WaterfallArgs};
use commands::playbook::PlaybookArgs;

/// Single-round term sheet economics
#[derive(Parser)]
#[command(
    name = "termsheet",
    version,
    about = "Single-round term sheet economics",
    long_about = "A CLI for reasoning about a financing round with decimal precision. \
                  Computes post-money ownership, implied revenue multiples, liquidation \
                  waterfalls across downside/base/upside exits, and a negotiation playbook."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level filter when RUST_LOG is unset (e.g. warn, info, debug)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every calculation for a term sheet submission
    Analyze(AnalyzeArgs),
    /// Split the assumed exit between investor and founders
    Waterfall(WaterfallArgs),
    /// Waterfall at 0.5x, 1x and 2x of the base exit value
    Scenarios(ScenariosArgs),
    /// Post-money ownership split
    Ownership(OwnershipArgs),
    /// Implied revenue multiple and valuation band
    Multiple(MultipleArgs),
    /// Negotiation prompt, guidance and exportable summary
    Playbook(PlaybookArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::economics::run_analyze(args),
        Commands::Waterfall(args) => commands::economics::run_waterfall(args),
        Commands::Scenarios(args) => commands::economics::run_scenarios(args),
        Commands::Ownership(args) => commands::economics::run_ownership(args),
        Commands::Multiple(args) => commands::economics::run_multiple(args),
        Commands::Playbook(args) => commands::playbook::run_playbook(args),
        Commands::Version => {
            println!("termsheet {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
