//! Password hashing utilities using Argon2id.
//!
//! Passwords are never stored in plaintext. The `PasswordHashing` trait is the
//! capability the user store depends on; `Argon2PasswordHasher` is the
//! production implementation, producing self-describing PHC strings.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// One-way password hashing with matching verification.
pub trait PasswordHashing: Send + Sync {
    /// Produces a salted digest of `password`.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Checks `password` against a digest produced by [`PasswordHashing::hash`].
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the digest is unusable.
    fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError>;
}

/// Argon2id costs (OWASP 2024 baseline): 19 MiB memory, two passes, one lane.
const MEMORY_COST_KIB: u32 = 19456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

/// Argon2id implementation of [`PasswordHashing`].
///
/// Digests are PHC strings, so verification reads the cost parameters from
/// the stored digest rather than from this hasher.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::with_costs(MEMORY_COST_KIB, TIME_COST, PARALLELISM)
            .unwrap_or_else(|_| Self { params: Params::default() })
    }

    /// Builds a hasher with explicit Argon2id costs.
    pub fn with_costs(
        memory_kib: u32,
        iterations: u32,
        lanes: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, lanes, Some(OUTPUT_LEN))
            .map_err(|e| PasswordError::HashError(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHashing for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest).map_err(|_| PasswordError::InvalidHashFormat)?;

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerifyError(e.to_string())),
        }
    }
}

/// Hashes a password with the default Argon2id hasher.
///
/// # Example
/// ```
/// use shared::password::hash_password;
///
/// let digest = hash_password("my_secure_password").unwrap();
/// assert!(digest.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    Argon2PasswordHasher::new().hash(password)
}

/// Verifies a password against a stored PHC digest.
///
/// # Example
/// ```
/// use shared::password::{hash_password, verify_password};
///
/// let digest = hash_password("my_password").unwrap();
/// assert!(verify_password("my_password", &digest).unwrap());
/// assert!(!verify_password("wrong_password", &digest).unwrap());
/// ```
pub fn verify_password(password: &str, digest: &str) -> Result<bool, PasswordError> {
    Argon2PasswordHasher::new().verify(password, digest)
}
