//! Recommend command handler.

use std::path::PathBuf;

use anyhow::Result;

use crate::model::load_snapshot;
use crate::recommend::{describe_product, Recommendation, RecommendationEngine};

use super::{exit_codes, json_envelope, OutputFormat};

/// Run the recommend command, returning the desired exit code.
pub fn run_recommend(
    snapshot_path: PathBuf,
    output: OutputFormat,
    describe: bool,
) -> Result<i32> {
    let snapshot = load_snapshot(&snapshot_path)?;

    tracing::info!(
        products = snapshot.products.len(),
        holdings = snapshot.holdings.len(),
        "scoring product catalog"
    );

    let engine = RecommendationEngine::new();
    let recommendations =
        engine.recommend(&snapshot.products, &snapshot.user, &snapshot.holdings);

    match output {
        OutputFormat::Json => println!("{}", json_envelope(&recommendations)),
        OutputFormat::Text => print_text(&recommendations, describe),
    }

    Ok(exit_codes::SUCCESS)
}

fn print_text(recommendations: &[Recommendation], describe: bool) {
    if recommendations.is_empty() {
        println!("No products cleared the recommendation threshold.");
        return;
    }

    for (index, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} — {}% match ({}, {} risk, {}% yield)",
            index + 1,
            rec.product.name,
            rec.match_percentage,
            rec.product.product_type,
            rec.product.risk,
            rec.product.yield_pct,
        );
        for reason in &rec.reasons {
            println!("   - {reason}");
        }
        if describe {
            println!("   {}", describe_product(&rec.product));
        }
    }
}
