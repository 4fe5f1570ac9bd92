//! Argon2id hashing helpers shared by the credential stores.
//!
//! Hashing is CPU-bound, so both directions run on the blocking pool.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use chirper_core::Password;
use secrecy::{ExposeSecret, Secret};

pub async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let params = Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?;
        let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
            .map_err(|e| e.to_string())?
            .to_string();
        Ok(Secret::from(hash))
    })
    .await
    .map_err(|e| e.to_string())?
}

pub async fn verify_password_hash(
    expected_hash: Secret<String>,
    candidate: Password,
) -> Result<(), String> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(expected_hash.expose_secret()).map_err(|e| e.to_string())?;
        Argon2::default()
            .verify_password(candidate.as_ref().expose_secret().as_bytes(), &parsed)
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())?
}
