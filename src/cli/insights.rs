//! Insights command handler.

use std::path::PathBuf;

use anyhow::Result;

use crate::model::load_snapshot;
use crate::recommend::derive_portfolio_insights;

use super::{exit_codes, json_envelope, OutputFormat};

/// Run the insights command, returning the desired exit code.
pub fn run_insights(snapshot_path: PathBuf, output: OutputFormat) -> Result<i32> {
    let snapshot = load_snapshot(&snapshot_path)?;

    let insights = derive_portfolio_insights(&snapshot.user, &snapshot.holdings);

    match output {
        OutputFormat::Json => println!("{}", json_envelope(&insights)),
        OutputFormat::Text => {
            if insights.is_empty() {
                println!("No portfolio insights to report.");
            }
            for insight in &insights {
                println!("[{}] {}", insight.severity.name(), insight.title);
                println!("  {}", insight.description);
                for recommendation in &insight.recommendations {
                    println!("  - {recommendation}");
                }
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}
