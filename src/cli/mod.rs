//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each implements the business logic
//! for one subcommand and returns the desired process exit code.

mod insights;
mod password;
mod recommend;

pub use insights::run_insights;
pub use password::{run_check, run_generate};
pub use recommend::run_recommend;

use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON, wrapped with tool name and version
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// A requested threshold was not met (e.g. --require-strong)
    pub const THRESHOLD_NOT_MET: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Wrap a serializable payload with tool identification for JSON output.
pub(crate) fn json_envelope<T: serde::Serialize>(payload: &T) -> String {
    let output = serde_json::json!({
        "tool": "advisor-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "result": payload,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}
