//! Weak-pattern detectors and feature extraction.
//!
//! The detectors are precompiled pattern sets: a denylist of common fragments,
//! a consecutive-repeat scan (the regex crate has no backreferences, so this
//! one is an explicit scan), and the fixed list of three-character ascending
//! runs.

use std::sync::LazyLock;

use regex::Regex;

use super::analyzer::Identity;

/// Minimum length before the base length point is awarded
pub const MIN_LENGTH: usize = 8;

/// A character repeated this many times consecutively counts as a weak run
const REPEAT_RUN: usize = 3;

static COMMON_FRAGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)(123|abc|qwe|asd|zxc|password|admin|login)").expect("static regex")
});

static SEQUENTIAL_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(?i)(012|123|234|345|456|567|678|789|890\
         |abc|bcd|cde|def|efg|fgh|ghi|hij|ijk|jkl|klm|lmn\
         |mno|nop|opq|pqr|qrs|rst|stu|tuv|uvw|vwx|wxy|xyz)",
    )
    .expect("static regex")
});

/// Boolean feature vector extracted from one candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordFeatures {
    /// Character count (not bytes)
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_symbols: bool,
    pub has_common_pattern: bool,
    pub has_repeated_chars: bool,
    pub has_sequential_chars: bool,
    pub has_personal_info: bool,
}

impl PasswordFeatures {
    /// Extract all features from a candidate password.
    ///
    /// Identity fragments (names, the email local part) are matched as
    /// case-insensitive substrings; empty fragments are ignored.
    #[must_use]
    pub fn extract(password: &str, identity: Option<&Identity>) -> Self {
        Self {
            length: password.chars().count(),
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digits: password.chars().any(|c| c.is_ascii_digit()),
            has_symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
            has_common_pattern: COMMON_FRAGMENTS.is_match(password),
            has_repeated_chars: has_repeated_run(password),
            has_sequential_chars: SEQUENTIAL_RUNS.is_match(password),
            has_personal_info: contains_personal_info(password, identity),
        }
    }

    /// Whether the base length requirement is met
    #[must_use]
    pub const fn meets_min_length(&self) -> bool {
        self.length >= MIN_LENGTH
    }
}

/// Any character repeated three or more times consecutively.
fn has_repeated_run(password: &str) -> bool {
    let mut run = 0usize;
    let mut previous: Option<char> = None;
    for c in password.chars() {
        if previous == Some(c) {
            run += 1;
            if run >= REPEAT_RUN {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

/// Case-insensitive substring match against the supplied identity fragments.
fn contains_personal_info(password: &str, identity: Option<&Identity>) -> bool {
    let Some(identity) = identity else {
        return false;
    };
    let haystack = password.to_lowercase();
    identity
        .fragments()
        .iter()
        .any(|fragment| haystack.contains(fragment))
}
