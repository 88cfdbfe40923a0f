use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use time::OffsetDateTime;
use tracing::{error, warn};
use uuid::Uuid;

use super::jwt::JwtKeys;
use crate::{error::AppError, state::AppState};

/// Who is calling: resolved from a valid, unrevoked bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub user_id: Uuid,
    pub token_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Read Authorization header
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            AppError::Unauthorized("Invalid or expired token".into())
        })?;

        let now = OffsetDateTime::now_utc();
        let active = state
            .tokens
            .find_active(claims.jti, now)
            .await
            .map_err(|e| {
                error!(error = %e, token_id = %claims.jti, "token lookup failed");
                AppError::Internal(e)
            })?;

        match active {
            Some(record) if record.user_id == claims.sub && record.is_active(now) => {
                Ok(AuthenticatedIdentity {
                    user_id: record.user_id,
                    token_id: record.id,
                })
            }
            _ => {
                warn!(token_id = %claims.jti, user_id = %claims.sub, "revoked or unknown token");
                Err(AppError::Unauthorized("Invalid or expired token".into()))
            }
        }
    }
}
