//! Property-based tests for the password analyzer and generator.

use advisor_tools::password::{
    analyze_password, generate_password_with, Identity, StrengthLabel, MIN_GENERATED_LENGTH,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn analyzer_never_panics_and_stays_bounded(password in "\\PC{0,64}") {
        let assessment = analyze_password(&password, None);
        prop_assert!(assessment.score <= 5);
        prop_assert_eq!(assessment.is_strong, assessment.score >= 4);
        prop_assert_eq!(assessment.feedback, StrengthLabel::from_score(assessment.score));
    }

    #[test]
    fn analyzer_handles_identity_without_panicking(
        password in "\\PC{0,32}",
        first in "\\PC{0,12}",
        email in "\\PC{0,16}",
    ) {
        let identity = Identity {
            first_name: Some(first),
            last_name: None,
            email: Some(email),
        };
        let assessment = analyze_password(&password, Some(&identity));
        prop_assert!(assessment.score <= 5);
    }

    #[test]
    fn adding_a_missing_digit_never_lowers_the_score(
        // No digits, so the appended digit adds a class without completing
        // any digit-based weak pattern
        password in "[A-Za-z!@#%^&*_]{0,24}",
        digit in 0u32..10,
    ) {
        let before = analyze_password(&password, None);
        let extended = format!("{password}{digit}");
        let after = analyze_password(&extended, None);
        prop_assert!(
            after.score >= before.score,
            "score dropped from {} to {} for {:?}",
            before.score,
            after.score,
            extended
        );
    }

    #[test]
    fn suggestions_end_with_confirmation_when_strong(password in "\\PC{0,64}") {
        let assessment = analyze_password(&password, None);
        let has_confirmation = assessment
            .suggestions
            .last()
            .is_some_and(|s| s.starts_with("Great!"));
        prop_assert_eq!(assessment.is_strong, has_confirmation);
    }

    #[test]
    fn generated_passwords_satisfy_the_composition_contract(
        seed in any::<u64>(),
        length in MIN_GENERATED_LENGTH..64usize,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let password = generate_password_with(&mut rng, length).unwrap();

        prop_assert_eq!(password.chars().count(), length);
        prop_assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert!(password.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generator_rejects_impossible_lengths(
        seed in any::<u64>(),
        length in 0usize..MIN_GENERATED_LENGTH,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(generate_password_with(&mut rng, length).is_err());
    }
}

#[test]
fn label_table_matches_the_fixed_buckets() {
    let expected = [
        "Very Weak",
        "Weak",
        "Fair",
        "Good",
        "Strong",
        "Very Strong",
    ];
    for (score, name) in expected.iter().enumerate() {
        assert_eq!(StrengthLabel::from_score(score as u8).name(), *name);
    }
    // Scores above the clamp saturate at the top bucket
    assert_eq!(StrengthLabel::from_score(9).name(), "Very Strong");
}
