//! advisor-tools: investment recommendation and password strength CLI
//!
//! Thin front-end over the library's scoring engines; every subcommand maps
//! to one stateless computation over a caller-supplied snapshot.

use std::path::PathBuf;
use std::process::ExitCode;

use advisor_tools::cli::{
    exit_codes, run_check, run_generate, run_insights, run_recommend, OutputFormat,
};
use advisor_tools::password::{Identity, DEFAULT_GENERATED_LENGTH};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "advisor-tools")]
#[command(version)]
#[command(about = "Investment recommendation and password strength scoring", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Threshold not met (--require-strong)
    2  Error occurred

EXAMPLES:
    # Rank a product catalog against a user snapshot
    advisor-tools recommend portfolio.json

    # Portfolio insights as JSON
    advisor-tools insights portfolio.json -o json

    # Gate a signup flow on password strength
    advisor-tools check 'Tr0ub4dor&3' --require-strong

    # Generate a 16-character strong password
    advisor-tools generate --length 16")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog in a portfolio snapshot against its user
    Recommend {
        /// Path to a portfolio snapshot JSON file
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Include the full product description under each recommendation
        #[arg(long)]
        describe: bool,
    },

    /// Derive qualitative insights from a portfolio snapshot
    Insights {
        /// Path to a portfolio snapshot JSON file
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Assess the strength of a candidate password
    Check {
        /// The candidate password
        password: String,

        /// First name, for personal-information leakage detection
        #[arg(long)]
        first_name: Option<String>,

        /// Last name, for personal-information leakage detection
        #[arg(long)]
        last_name: Option<String>,

        /// Email address; only the local part is checked
        #[arg(long)]
        email: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Exit non-zero unless the password scores as strong
        #[arg(long)]
        require_strong: bool,
    },

    /// Generate a password containing all four character classes
    Generate {
        /// Password length (minimum 4)
        #[arg(long, default_value_t = DEFAULT_GENERATED_LENGTH)]
        length: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match dispatch(cli.command) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX)),
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(u8::try_from(exit_codes::ERROR).unwrap_or(u8::MAX))
        }
    }
}

fn dispatch(command: Commands) -> Result<i32> {
    match command {
        Commands::Recommend {
            snapshot,
            output,
            describe,
        } => run_recommend(snapshot, output, describe),
        Commands::Insights { snapshot, output } => run_insights(snapshot, output),
        Commands::Check {
            password,
            first_name,
            last_name,
            email,
            output,
            require_strong,
        } => {
            let identity = Identity {
                first_name,
                last_name,
                email,
            };
            run_check(&password, identity, output, require_strong)
        }
        Commands::Generate { length, output } => run_generate(length, output),
    }
}
