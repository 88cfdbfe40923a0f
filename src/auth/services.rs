use axum::extract::FromRef;
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterRequest, TokenResponse},
        extractors::AuthenticatedIdentity,
        jwt::JwtKeys,
        password::{hash_password, verify_stored_password},
    },
    error::{AppError, AppResult},
    state::AppState,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// The single failure every login path reports.
pub(crate) fn invalid_credentials() -> AppError {
    AppError::Unauthorized(INVALID_CREDENTIALS.into())
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn register(state: &AppState, mut payload: RegisterRequest) -> AppResult<PublicUser> {
    payload.email = normalize_email(&payload.email);
    payload.validate()?;

    if state.users.find_by_email(&payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::Conflict(
            "User already registered with this email".into(),
        ));
    }

    let hash = hash_password(&payload.password)?;

    // lost a race with a concurrent registration of the same email
    let user = state
        .users
        .create(&payload.email, &hash)
        .await?
        .ok_or_else(|| AppError::Conflict("User already registered with this email".into()))?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user.into())
}

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<TokenResponse> {
    let email = normalize_email(&payload.email);

    // unknown emails still pay for one Argon2 verification
    let user = state.users.find_by_email(&email).await?;
    let matched = verify_stored_password(
        &payload.password,
        user.as_ref().map(|u| u.password_hash.as_str()),
    )?;

    let user = match user {
        Some(user) if matched => user,
        Some(user) => {
            warn!(email = %email, user_id = %user.id, "login invalid password");
            return Err(invalid_credentials());
        }
        None => {
            warn!(email = %email, "login unknown email");
            return Err(invalid_credentials());
        }
    };

    let keys = JwtKeys::from_ref(state);
    let now = OffsetDateTime::now_utc();
    let record = state
        .tokens
        .insert(Uuid::new_v4(), user.id, keys.expires_at(now))
        .await?;
    let signed = keys.sign(user.id, record.id, now, record.expires_at)?;

    info!(user_id = %user.id, token_id = %record.id, "user logged in");
    Ok(TokenResponse {
        token: signed.token,
        token_type: "bearer",
        expires_at: signed.expires_at,
    })
}

pub async fn logout(state: &AppState, identity: AuthenticatedIdentity) -> AppResult<()> {
    if !state.tokens.revoke(identity.token_id).await? {
        warn!(token_id = %identity.token_id, "token already revoked");
        return Err(AppError::Unauthorized("Token already revoked".into()));
    }
    info!(user_id = %identity.user_id, token_id = %identity.token_id, "user logged out");
    Ok(())
}

pub async fn current_user(
    state: &AppState,
    identity: AuthenticatedIdentity,
) -> AppResult<PublicUser> {
    state
        .users
        .find_by_id(identity.user_id)
        .await?
        .map(PublicUser::from)
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))
}
