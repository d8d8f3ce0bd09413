//! Password strength scoring and assessment.
//!
//! Scoring starts at zero, awards one point per met composition requirement
//! plus length-tier bonuses, subtracts fixed penalties for weak patterns, and
//! clamps to the 0-5 range. The label and strength flag are pure functions of
//! the final score.

use serde::{Deserialize, Serialize};

use super::patterns::{PasswordFeatures, MIN_LENGTH};

/// Length at which the first bonus point is awarded
const BONUS_LENGTH_MID: usize = 12;
/// Length at which the second bonus point is awarded
const BONUS_LENGTH_LONG: usize = 16;

const COMMON_PATTERN_PENALTY: i32 = 2;
const REPEATED_CHARS_PENALTY: i32 = 1;
const SEQUENTIAL_CHARS_PENALTY: i32 = 1;
const PERSONAL_INFO_PENALTY: i32 = 2;

/// Score at or above which a password counts as strong
const STRONG_SCORE: u8 = 4;

/// Optional identity fields used only for personal-information leakage
/// detection. No credential material is handled here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// Lower-cased, non-empty fragments to scan for.
    ///
    /// The email contributes only its local part.
    #[must_use]
    pub fn fragments(&self) -> Vec<String> {
        let mut fragments = Vec::new();
        if let Some(first) = self.first_name.as_deref().filter(|s| !s.is_empty()) {
            fragments.push(first.to_lowercase());
        }
        if let Some(last) = self.last_name.as_deref().filter(|s| !s.is_empty()) {
            fragments.push(last.to_lowercase());
        }
        if let Some(email) = self.email.as_deref() {
            let local = email.split('@').next().unwrap_or_default();
            if !local.is_empty() {
                fragments.push(local.to_lowercase());
            }
        }
        fragments
    }
}

/// Qualitative strength label, a fixed six-bucket function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Map a clamped score to its label. Total for all inputs; scores above 5
    /// saturate at the top bucket.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Display name for this label
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete assessment for one candidate password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAssessment {
    /// Integer score, 0-5
    pub score: u8,
    pub feedback: StrengthLabel,
    /// Ordered remediation suggestions; advisory only
    pub suggestions: Vec<String>,
    /// `score >= 4`
    pub is_strong: bool,
}

/// Assess a candidate password.
///
/// Total over all inputs: an empty password scores 0 ("Very Weak").
#[must_use]
pub fn analyze_password(password: &str, identity: Option<&Identity>) -> PasswordAssessment {
    let features = PasswordFeatures::extract(password, identity);
    let score = calculate_score(&features);
    let suggestions = suggestions_for(&features, score);

    PasswordAssessment {
        score,
        feedback: StrengthLabel::from_score(score),
        suggestions,
        is_strong: score >= STRONG_SCORE,
    }
}

/// Composition points minus weak-pattern penalties, clamped to [0, 5].
///
/// The length-tier bonuses check the true character count. (The behavior this
/// replaces gated them on the boolean >=8 flag, which made them unreachable.)
fn calculate_score(features: &PasswordFeatures) -> u8 {
    let mut score: i32 = 0;

    if features.meets_min_length() {
        score += 1;
    }
    if features.has_uppercase {
        score += 1;
    }
    if features.has_lowercase {
        score += 1;
    }
    if features.has_digits {
        score += 1;
    }
    if features.has_symbols {
        score += 1;
    }

    if features.length >= BONUS_LENGTH_MID {
        score += 1;
    }
    if features.length >= BONUS_LENGTH_LONG {
        score += 1;
    }

    if features.has_common_pattern {
        score -= COMMON_PATTERN_PENALTY;
    }
    if features.has_repeated_chars {
        score -= REPEATED_CHARS_PENALTY;
    }
    if features.has_sequential_chars {
        score -= SEQUENTIAL_CHARS_PENALTY;
    }
    if features.has_personal_info {
        score -= PERSONAL_INFO_PENALTY;
    }

    score.clamp(0, 5) as u8
}

/// One remediation message per failing feature, in fixed order, plus a
/// confirmation when the password is already strong.
fn suggestions_for(features: &PasswordFeatures, score: u8) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !features.meets_min_length() {
        suggestions.push(format!("Use at least {MIN_LENGTH} characters"));
    } else if score < STRONG_SCORE {
        suggestions.push(format!(
            "Consider using {BONUS_LENGTH_MID}+ characters for better security"
        ));
    }

    if !features.has_uppercase {
        suggestions.push("Add uppercase letters (A-Z)".to_string());
    }
    if !features.has_lowercase {
        suggestions.push("Add lowercase letters (a-z)".to_string());
    }
    if !features.has_digits {
        suggestions.push("Include numbers (0-9)".to_string());
    }
    if !features.has_symbols {
        suggestions.push("Add special characters (!@#$%^&*)".to_string());
    }

    if features.has_common_pattern {
        suggestions.push("Avoid common patterns like '123', 'abc', or 'password'".to_string());
    }
    if features.has_repeated_chars {
        suggestions.push("Avoid repeating characters (e.g., 'aaa', '111')".to_string());
    }
    if features.has_sequential_chars {
        suggestions.push("Avoid sequential characters (e.g., 'abc', '123')".to_string());
    }
    if features.has_personal_info {
        suggestions.push("Don't use personal information like your name or email".to_string());
    }

    if score >= STRONG_SCORE {
        suggestions.push("Great! Your password is strong and secure".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_very_weak() {
        let assessment = analyze_password("", None);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.feedback, StrengthLabel::VeryWeak);
        assert!(!assessment.is_strong);
    }

    #[test]
    fn test_all_class_long_password_is_very_strong() {
        // 13 chars, all four classes, no weak patterns:
        // 5 base + 1 mid-length bonus = 6, clamped to 5
        let assessment = analyze_password("Tr0ub4dor&3XQ", None);
        assert_eq!(assessment.score, 5);
        assert_eq!(assessment.feedback, StrengthLabel::VeryStrong);
        assert!(assessment.is_strong);
        assert_eq!(
            assessment.suggestions,
            vec!["Great! Your password is strong and secure"]
        );
    }

    #[test]
    fn test_common_pattern_password_collapses() {
        // "password123": 3 base points (length, lowercase, digits), then the
        // "password" fragment (-2) and the "123" ascending run (-1) wipe it out
        let assessment = analyze_password("password123", None);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.feedback, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_sixteen_char_bonus() {
        // 17 chars, all classes, no penalties: 5 + 2 = 7, clamped to 5
        let assessment = analyze_password("K9#mQ2$vW8@xR5!nZ", None);
        assert_eq!(assessment.score, 5);
    }

    #[test]
    fn test_personal_info_penalty() {
        let identity = Identity {
            first_name: Some("Jordan".into()),
            last_name: None,
            email: None,
        };
        let without = analyze_password("XkQ9#mW2$v", None);
        let with = analyze_password("XkJordan9#m", Some(&identity));
        assert!(with.score < without.score);
        assert!(
            with.suggestions
                .iter()
                .any(|s| s.contains("personal information"))
        );
    }

    #[test]
    fn test_label_table_is_fixed() {
        let expected = [
            (0, "Very Weak"),
            (1, "Weak"),
            (2, "Fair"),
            (3, "Good"),
            (4, "Strong"),
            (5, "Very Strong"),
        ];
        for (score, name) in expected {
            assert_eq!(StrengthLabel::from_score(score).name(), name);
        }
    }

    #[test]
    fn test_short_password_suggests_minimum_length() {
        let assessment = analyze_password("aB3!", None);
        assert_eq!(assessment.suggestions[0], "Use at least 8 characters");
    }

    #[test]
    fn test_mediocre_password_suggests_longer() {
        // Meets the minimum but not strong: first suggestion is the 12+ nudge
        let assessment = analyze_password("abcdefgh", None);
        assert!(assessment.score < 4);
        assert_eq!(
            assessment.suggestions[0],
            "Consider using 12+ characters for better security"
        );
    }

    #[test]
    fn test_email_local_part_only() {
        let identity = Identity {
            first_name: None,
            last_name: None,
            email: Some("sam@example.com".into()),
        };
        assert_eq!(identity.fragments(), vec!["sam".to_string()]);
    }
}
