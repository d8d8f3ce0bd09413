//! Password strength analysis and generation.
//!
//! The analyzer scores a candidate password 0-5 against composition rules and
//! personal-information leakage; the generator produces passwords guaranteed
//! to satisfy all four composition classes. Both are stateless; the generator
//! is the only source of nondeterminism in the crate.

mod analyzer;
mod generator;
mod patterns;

pub use analyzer::{analyze_password, Identity, PasswordAssessment, StrengthLabel};
pub use generator::{
    generate_password, generate_password_with, DEFAULT_GENERATED_LENGTH, MIN_GENERATED_LENGTH,
};
pub use patterns::PasswordFeatures;
