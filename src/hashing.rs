//! Password hashing and comparison helpers shared by the login and
//! registration paths.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sha2::{Digest, Sha256};

use crate::errors::AuthError;

// ── Argon2 helpers ────────────────────────────────────────────

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt   = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash   = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::InvalidHash(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::CredentialMismatch)
}

// ── Digest & comparison ───────────────────────────────────────

/// SHA-256 hex digest of a password, matching what the web client sends in
/// place of the plaintext.
pub fn digest_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Constant-time string equality for digest comparison.
pub fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Mask a sensitive value for log output: keep the first and last two
/// characters, star the middle. Values of 4 characters or fewer are fully
/// starred.
pub fn mask_sensitive(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let start: String = chars[..2].iter().collect();
    let end: String   = chars[chars.len() - 2..].iter().collect();
    format!("{start}{}{end}", "*".repeat(chars.len() - 4))
}

// ── Tests ─────────────────────────────────────────────────────
