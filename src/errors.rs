use thiserror::Error;

/// Errors from the hashing helpers. Validation itself never errors — an
/// invalid credential is expressed as data, not as an `Err`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed: {0}")]
    InvalidHash(String),

    #[error("Credentials do not match")]
    CredentialMismatch,
}
