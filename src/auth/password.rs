use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use tracing::error;

lazy_static! {
    /// Stand-in hash checked when no account matches, so a miss costs the same as a wrong password.
    static ref DUMMY_HASH: Option<String> = hash_password("profilekeeper-no-such-account").ok();
}

fn argon2_error(context: &'static str, e: argon2::password_hash::Error) -> anyhow::Error {
    error!(error = %e, "{}", context);
    anyhow::anyhow!("{}: {}", context, e)
}

/// Argon2id PHC string with a fresh random salt.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| argon2_error("argon2 hash failed", e))
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| argon2_error("argon2 hash unreadable", e))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Checks `plain` against the stored hash, or against [`DUMMY_HASH`] when
/// there is none. A missing hash never matches.
pub fn verify_stored_password(plain: &str, stored: Option<&str>) -> anyhow::Result<bool> {
    match stored {
        Some(hash) => verify_password(plain, hash),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                verify_password(plain, dummy)?;
            }
            Ok(false)
        }
    }
}
