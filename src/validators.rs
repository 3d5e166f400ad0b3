//! Format validators.
//!
//! Syntactic well-formedness only — strength and complexity live in
//! [`crate::strength`] and [`crate::complexity`]. Invalid input yields
//! `false`, never an error.

// ── Character classes ─────────────────────────────────────────

/// Specials accepted by the registration password format.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

fn is_email_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_email_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

// ── Validators ────────────────────────────────────────────────

/// Validate an email address: `local@domain.tld`, where `local` is one or
/// more of `[A-Za-z0-9._%+-]`, `domain` one or more of `[A-Za-z0-9.-]`, and
/// `tld` two or more ASCII letters.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_email_local_char) {
        return false;
    }
    // The TLD is everything after the last dot; the rest is the domain.
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty() || !host.chars().all(is_email_domain_char) {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate a verification code: exactly 6 ASCII digits.
pub fn validate_verification_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}

/// Validate the registration password format: 8–20 characters drawn only
/// from `[A-Za-z0-9@$!%*?&]`, with at least one lowercase letter, one
/// uppercase letter, one digit and one special character.
pub fn validate_password_format(password: &str) -> bool {
    let mut len = 0usize;
    let mut has_lower   = false;
    let mut has_upper   = false;
    let mut has_digit   = false;
    let mut has_special = false;

    for c in password.chars() {
        len += 1;
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SPECIALS.contains(c) {
            has_special = true;
        } else {
            return false;
        }
    }

    (8..=20).contains(&len) && has_lower && has_upper && has_digit && has_special
}

/// Validate a username: 3–20 characters of `[A-Za-z0-9_-]`.
pub fn validate_username(username: &str) -> bool {
    (3..=20).contains(&username.len())
        && username
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

// ── Tests ─────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("user.name+tag@mail.example.com"));
        assert!(validate_email("x_1%y@sub-domain.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@.co"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@b.c"));
        assert!(!validate_email("a@b.c0m"));
        assert!(!validate_email("a b@c.de"));
    }

    #[test]
    fn verification_code_is_exactly_six_digits() {
        assert!(validate_verification_code("123456"));
        assert!(!validate_verification_code("12345"));
        assert!(!validate_verification_code("1234567"));
        assert!(!validate_verification_code("12345a"));
        assert!(!validate_verification_code(""));
    }

    #[test]
    fn password_format_enforces_length_bounds() {
        assert!(!validate_password_format("Aa1!bcd"));              // 7 chars
        assert!(validate_password_format("Aa1!bcde"));              // 8 chars
        assert!(validate_password_format("Aa1!bcdefghijklmnopq"));  // 20 chars
        assert!(!validate_password_format("Aa1!bcdefghijklmnopqr")); // 21 chars
    }

    #[test]
    fn password_format_requires_all_classes() {
        assert!(!validate_password_format("aa1!bcde")); // no uppercase
        assert!(!validate_password_format("AA1!BCDE")); // no lowercase
        assert!(!validate_password_format("Aab!bcde")); // no digit
        assert!(!validate_password_format("Aa1bbcde")); // no special
    }

    #[test]
    fn password_format_rejects_foreign_characters() {
        assert!(!validate_password_format("Aa1!bcd e")); // space
        assert!(!validate_password_format("Aa1!bcd#"));  // '#' not in the set
    }

    #[test]
    fn username_bounds_and_charset() {
        assert!(validate_username("joe"));
        assert!(validate_username("user_name-01"));
        assert!(!validate_username("jo"));
        assert!(!validate_username("a".repeat(21).as_str()));
        assert!(!validate_username("bad name"));
        assert!(!validate_username("bad@name"));
    }

    #[test]
    fn validators_are_pure() {
        for _ in 0..2 {
            assert!(validate_email("a@b.co"));
            assert!(validate_verification_code("000000"));
            assert!(validate_password_format("Aa1!bcde"));
        }
    }
}
