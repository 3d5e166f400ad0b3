//! Composite password complexity checks.
//!
//! Each check returns either "no issue" or a human-readable violation, and
//! [`evaluate_credential`] aggregates all of them in a fixed order so the
//! resulting error list is deterministic. Nothing here errors; every check
//! is a pure predicate over the input string.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::debug;

// ── Static tables ─────────────────────────────────────────────

/// Specials accepted by the complexity check (wider than the registration
/// format's set).
const COMPLEXITY_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Keyboard, alphabet and numeric runs scanned for 3-character sequences.
const SEQUENCES: [&str; 5] = [
    "1234567890",
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

/// Passwords rejected outright, compared case-insensitively. Built once at
/// first use and never mutated.
static COMMON_PASSWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "password",
        "password1",
        "password123",
        "passw0rd",
        "admin",
        "admin123",
        "root",
        "123456",
        "12345678",
        "123456789",
        "1234567890",
        "qwerty",
        "qwerty123",
        "letmein",
        "welcome",
        "iloveyou",
        "abc123",
        "monkey",
        "dragon",
        "111111",
        "000000",
        "sunshine",
        "princess",
        "football",
        "trustno1",
    ]
    .into_iter()
    .collect()
});

pub const MIN_PASSWORD_LENGTH: usize = 8;

// ── Types ─────────────────────────────────────────────────────

/// Aggregate verdict: `is_valid` iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordVerdict {
    pub is_valid: bool,
    pub errors:   Vec<String>,
}

// ── Individual checks ─────────────────────────────────────────

/// True if the password exactly matches a known weak password,
/// case-insensitively.
pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(password.to_lowercase().as_str())
}

/// Reject passwords that contain the username (or vice versa),
/// case-insensitively. Skipped entirely when the username is empty, since
/// the empty string is a substring of everything.
pub fn check_password_contains_username(password: &str, username: &str) -> Option<String> {
    if username.is_empty() {
        return None;
    }
    let password = password.to_lowercase();
    let username = username.to_lowercase();
    if password.contains(&username) || username.contains(&password) {
        return Some("Password must not contain the username".to_owned());
    }
    None
}

/// Reject passwords containing any 3-character ascending run from the fixed
/// sequence tables (`123`, `abc`, `qwe`, ...).
pub fn check_sequential_chars(password: &str) -> Option<String> {
    let lowered = password.to_lowercase();
    for sequence in SEQUENCES {
        for start in 0..sequence.len() - 2 {
            if lowered.contains(&sequence[start..start + 3]) {
                return Some("Password must not contain sequential characters".to_owned());
            }
        }
    }
    None
}

/// Reject passwords with the same character 3 or more times in a row.
pub fn check_repeating_chars(password: &str) -> Option<String> {
    if has_repeated_run(password) {
        return Some("Password must not repeat a character three times in a row".to_owned());
    }
    None
}

pub(crate) fn has_repeated_run(s: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0usize;
    for c in s.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

// ── Aggregates ────────────────────────────────────────────────

/// Check length, the four character classes and common-password membership.
/// Every missing class reports independently, in a fixed order.
pub fn validate_password_complexity(password: &str) -> PasswordVerdict {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain an uppercase letter".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain a lowercase letter".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain a digit".to_owned());
    }
    if !password.chars().any(|c| COMPLEXITY_SPECIALS.contains(c)) {
        errors.push("Password must contain a special character".to_owned());
    }
    if is_common_password(password) {
        debug!("Rejected a common password");
        errors.push("Password is too common".to_owned());
    }

    PasswordVerdict {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Run every complexity check in the fixed order: length, character
/// classes, common-password, username similarity, sequential runs, repeated
/// runs. The username check only runs when a username is supplied.
pub fn evaluate_credential(password: &str, username: Option<&str>) -> PasswordVerdict {
    let mut verdict = validate_password_complexity(password);

    if let Some(username) = username {
        if let Some(reason) = check_password_contains_username(password, username) {
            verdict.errors.push(reason);
        }
    }
    if let Some(reason) = check_sequential_chars(password) {
        verdict.errors.push(reason);
    }
    if let Some(reason) = check_repeating_chars(password) {
        verdict.errors.push(reason);
    }

    verdict.is_valid = verdict.errors.is_empty();
    verdict
}

// ── Tests ─────────────────────────────────────────────────────
