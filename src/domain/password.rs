//! Credentials value object - salted password hashing.
//!
//! A fresh random salt is generated for every hash and prepended to the
//! plaintext before hashing with Argon2id. The salt and the hash are only
//! ever created, stored and replaced together.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Salt + hashed password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    salt: String,
    hashed_password: String,
}

// Don't expose salt or hash in debug output
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("salt", &"[REDACTED]")
            .field("hashed_password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Hash `plain_text` under a freshly generated salt.
    ///
    /// # Errors
    /// Returns an internal error if the hasher rejects its input.
    pub fn generate(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng).as_str().to_string();
        let hashed_password = Self::hash(&salt, plain_text)?;
        Ok(Self {
            salt,
            hashed_password,
        })
    }

    /// Rebuild credentials from stored columns.
    pub fn from_parts(salt: String, hashed_password: String) -> Self {
        Self {
            salt,
            hashed_password,
        }
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    /// Verify a plain text password against the stored salt and hash.
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hashed_password) else {
            tracing::warn!("Stored password hash is malformed");
            return false;
        };
        let salted = format!("{}{}", self.salt, plain_text);
        Self::argon2()
            .verify_password(salted.as_bytes(), &parsed)
            .is_ok()
    }

    /// [`Credentials::generate`] on the blocking thread pool.
    ///
    /// # Errors
    /// Returns an internal error if hashing fails or the task is lost.
    pub async fn generate_async(plain_text: &str) -> AppResult<Self> {
        let plain_text = plain_text.to_string();
        tokio::task::spawn_blocking(move || Self::generate(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?
    }

    /// [`Credentials::verify`] on the blocking thread pool.
    ///
    /// # Errors
    /// Returns an internal error only if the task is lost.
    pub async fn verify_async(&self, plain_text: &str) -> AppResult<bool> {
        let credentials = self.clone();
        let plain_text = plain_text.to_string();
        tokio::task::spawn_blocking(move || credentials.verify(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))
    }

    fn hash(salt: &str, plain_text: &str) -> AppResult<String> {
        let salted = format!("{}{}", salt, plain_text);
        let phc_salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(salted.as_bytes(), &phc_salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}
