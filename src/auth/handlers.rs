use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LogoutResponse, PublicUser, RegisterRequest, TokenResponse},
        extractors::AuthenticatedIdentity,
        services,
    },
    error::AppResult,
    json::{ApiResponse, AppJson},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    let user = services::register(&state, payload).await?;
    Ok(Json(ApiResponse::with_data("registered", user)))
}

/// Malformed bodies fail like bad credentials instead of echoing parser detail.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<TokenResponse>>> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "login body rejected");
        services::invalid_credentials()
    })?;
    let token = services::login(&state, payload).await?;
    Ok(Json(ApiResponse::with_data("logged in", token)))
}

#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
) -> AppResult<Json<ApiResponse<LogoutResponse>>> {
    services::logout(&state, identity).await?;
    Ok(Json(ApiResponse::with_data(
        "logged out",
        LogoutResponse { revoked: true },
    )))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    let user = services::current_user(&state, identity).await?;
    Ok(Json(ApiResponse::with_data("authenticated", user)))
}
