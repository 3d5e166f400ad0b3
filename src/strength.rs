//! Password strength scoring.
//!
//! Two models live here. [`assess_password_strength`] is the additive scorer
//! the registration form polls per keystroke: it never rejects, it only maps
//! a password onto a 0–4 scale so the UI can draw a progress bar before the
//! hard format check passes. [`evaluate_login_password`] is the stricter
//! penalty model used on the login side, which subtracts points for repeated
//! runs and well-known prefixes.

use serde::Serialize;

use crate::complexity::has_repeated_run;

// ── Types ─────────────────────────────────────────────────────

/// Result of the additive scorer: a 0–4 score plus one feedback line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthAssessment {
    pub score:    u8,
    pub feedback: String,
}

/// Result of the penalty-model evaluator used at login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub score:     u8,
    pub feedback:  Vec<String>,
    pub is_strong: bool,
}

// ── Character-class predicates ────────────────────────────────

fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(s: &str) -> bool {
    s.chars().any(|c| !c.is_ascii_alphanumeric())
}

// ── Additive scorer ───────────────────────────────────────────

/// Score a password on the additive 0–4 scale.
///
/// One raw point each for: length ≥ 8, length ≥ 12, an uppercase letter, a
/// lowercase letter, a digit, and a non-alphanumeric character (max 6). The
/// reported score is `min(4, floor(raw / 1.5))`.
pub fn assess_password_strength(password: &str) -> StrengthAssessment {
    let len = password.chars().count();
    let mut raw: u32 = 0;

    if len >= 8 {
        raw += 1;
    }
    if len >= 12 {
        raw += 1;
    }
    if has_uppercase(password) {
        raw += 1;
    }
    if has_lowercase(password) {
        raw += 1;
    }
    if has_digit(password) {
        raw += 1;
    }
    if has_symbol(password) {
        raw += 1;
    }

    let feedback = if raw < 2 {
        "Password is too weak"
    } else if raw < 4 {
        "Password strength is medium"
    } else {
        "Password is very strong"
    };

    StrengthAssessment {
        // floor(raw / 1.5) in integer arithmetic
        score:    ((raw * 2) / 3).min(4) as u8,
        feedback: feedback.to_owned(),
    }
}

/// Estimate password entropy in bits, assuming uniform selection from the
/// detected character pool (digits 10, lowercase 26, uppercase 26, other 32).
///
/// An empty password has an empty pool and yields `0.0` rather than
/// `log2(0)`.
pub fn estimate_password_entropy(password: &str) -> f64 {
    let mut pool: u32 = 0;
    if has_digit(password) {
        pool += 10;
    }
    if has_lowercase(password) {
        pool += 26;
    }
    if has_uppercase(password) {
        pool += 26;
    }
    if has_symbol(password) {
        pool += 32;
    }
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).log2()
}

// ── Penalty-model evaluator ───────────────────────────────────

const COMMON_PREFIXES: [&str; 5] = ["abc", "123", "password", "admin", "qwerty"];

/// Evaluate a login password with the penalty model: +2 for length ≥ 8, +1
/// per character class, −1 for a repeated run, −2 for a common prefix. The
/// reported score is clamped to 0–5; `is_strong` uses the unclamped total.
pub fn evaluate_login_password(password: &str) -> StrengthReport {
    let mut score: i32 = 0;
    let mut feedback = Vec::new();

    if password.chars().count() >= 8 {
        score += 2;
    } else {
        feedback.push("Password must be at least 8 characters".to_owned());
    }

    if has_uppercase(password) {
        score += 1;
    }
    if has_lowercase(password) {
        score += 1;
    }
    if has_digit(password) {
        score += 1;
    }
    if has_symbol(password) {
        score += 1;
    }

    if has_repeated_run(password) {
        score -= 1;
        feedback.push("Avoid repeating the same character".to_owned());
    }

    let lowered = password.to_lowercase();
    if COMMON_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        score -= 2;
        feedback.push("Avoid common password patterns".to_owned());
    }

    StrengthReport {
        score: score.clamp(0, 5) as u8,
        feedback,
        is_strong: score >= 4,
    }
}

// ── Tests ─────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lowercase_password_scores_zero() {
        // "abc": only the lowercase point → raw 1 → score 0.
        let assessment = assess_password_strength("abc");
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.feedback, "Password is too weak");
    }

    #[test]
    fn full_coverage_password_scores_four() {
        // 12 chars, all four classes → raw 6 → score 4.
        let assessment = assess_password_strength("Abcdefgh123!");
        assert_eq!(assessment.score, 4);
        assert_eq!(assessment.feedback, "Password is very strong");
    }

    #[test]
    fn medium_tier_maps_to_raw_two_and_three() {
        // "abcdefgh": length ≥ 8 + lowercase → raw 2.
        let assessment = assess_password_strength("abcdefgh");
        assert_eq!(assessment.score, 1);
        assert_eq!(assessment.feedback, "Password strength is medium");
    }

    #[test]
    fn score_never_exceeds_four() {
        let assessment = assess_password_strength("Xk9!mQ2pL7@wZr4#");
        assert_eq!(assessment.score, 4);
    }

    #[test]
    fn entropy_of_empty_password_is_zero() {
        assert_eq!(estimate_password_entropy(""), 0.0);
    }

    #[test]
    fn entropy_grows_with_pool_and_length() {
        // 8 lowercase chars: 8 * log2(26)
        let lower_only = estimate_password_entropy("abcdefgh");
        assert!((lower_only - 8.0 * 26f64.log2()).abs() < 1e-9);

        // Adding a digit and an uppercase letter widens the pool to 62.
        let mixed = estimate_password_entropy("Abcdefg1");
        assert!((mixed - 8.0 * 62f64.log2()).abs() < 1e-9);
        assert!(mixed > lower_only);
    }

    #[test]
    fn entropy_counts_symbols_in_the_pool() {
        let with_symbol = estimate_password_entropy("ab!");
        assert!((with_symbol - 3.0 * 58f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn login_evaluator_rewards_coverage() {
        let report = evaluate_login_password("Xk9!mQ2p");
        assert_eq!(report.score, 5); // raw 6, clamped
        assert!(report.is_strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn login_evaluator_penalizes_repeats() {
        let strong = evaluate_login_password("Xk9!mQ2p");
        let repeated = evaluate_login_password("Xk9mQQQp");
        assert!(repeated.score < strong.score);
        assert!(repeated
            .feedback
            .iter()
            .any(|f| f.contains("repeating")));
    }

    #[test]
    fn login_evaluator_penalizes_common_prefixes() {
        let report = evaluate_login_password("qwerty123");
        assert!(!report.is_strong);
        assert!(report
            .feedback
            .iter()
            .any(|f| f.contains("common password patterns")));
    }

    #[test]
    fn login_evaluator_flags_short_passwords() {
        let report = evaluate_login_password("Ab1");
        assert!(!report.is_strong);
        assert!(report
            .feedback
            .iter()
            .any(|f| f.contains("at least 8 characters")));
    }
}
