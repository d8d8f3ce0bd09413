//! Password check and generate command handlers.

use anyhow::Result;

use crate::password::{analyze_password, generate_password, Identity};

use super::{exit_codes, json_envelope, OutputFormat};

/// Run the check command, returning the desired exit code.
///
/// With `require_strong`, a password below the strong threshold maps to a
/// non-zero exit code for use in CI or signup hooks.
pub fn run_check(
    password: &str,
    identity: Identity,
    output: OutputFormat,
    require_strong: bool,
) -> Result<i32> {
    let has_identity = identity.first_name.is_some()
        || identity.last_name.is_some()
        || identity.email.is_some();
    let assessment = analyze_password(password, has_identity.then_some(&identity));

    match output {
        OutputFormat::Json => println!("{}", json_envelope(&assessment)),
        OutputFormat::Text => {
            println!("{} ({}/5)", assessment.feedback, assessment.score);
            for suggestion in &assessment.suggestions {
                println!("  - {suggestion}");
            }
        }
    }

    if require_strong && !assessment.is_strong {
        tracing::warn!(score = assessment.score, "password below strong threshold");
        return Ok(exit_codes::THRESHOLD_NOT_MET);
    }

    Ok(exit_codes::SUCCESS)
}

/// Run the generate command, returning the desired exit code.
pub fn run_generate(length: usize, output: OutputFormat) -> Result<i32> {
    let password = generate_password(length)?;

    match output {
        OutputFormat::Json => println!("{}", json_envelope(&password)),
        OutputFormat::Text => println!("{password}"),
    }

    Ok(exit_codes::SUCCESS)
}
