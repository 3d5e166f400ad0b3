//! Credential validation and security core.
//!
//! Everything an auth layer needs to decide whether a submitted credential is
//! well-formed and strong enough to accept: format validators for emails,
//! usernames and verification codes, a progressive password strength scorer,
//! composite complexity checks against a common-password list, an in-memory
//! login attempt tracker, and the password hashing helpers the registration
//! and login routes share.
//!
//! All validation functions are pure and never fail for string input; an
//! invalid credential yields `false` or a non-empty error list, not an `Err`.
//! The only fallible surface is [`hashing`].

pub mod attempts;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod forms;
pub mod hashing;
pub mod strength;
pub mod validators;

pub use attempts::LoginAttemptTracker;
pub use complexity::{
    check_password_contains_username, check_repeating_chars, check_sequential_chars,
    evaluate_credential, validate_password_complexity, PasswordVerdict,
};
pub use config::SecurityConfig;
pub use errors::AuthError;
pub use forms::{validate_login_form, FieldError};
pub use hashing::{digest_password, hash_password, mask_sensitive, secure_compare, verify_password};
pub use strength::{
    assess_password_strength, estimate_password_entropy, evaluate_login_password,
    StrengthAssessment, StrengthReport,
};
pub use validators::{
    validate_email, validate_password_format, validate_username, validate_verification_code,
};
