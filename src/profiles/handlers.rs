use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::AuthenticatedIdentity,
    error::{AppError, AppResult},
    json::{ApiResponse, AppJson},
    profiles::{
        dto::{CreateProfileRequest, ProfileResponse, ProfileView, UpdateProfileRequest},
        services::{self, CreateOutcome, DeleteOutcome, UpdateOutcome},
    },
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        post(create_profile)
            .get(view_profile)
            .patch(update_profile)
            .delete(delete_profile),
    )
}

#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
    AppJson(payload): AppJson<CreateProfileRequest>,
) -> AppResult<Json<ApiResponse<ProfileResponse>>> {
    match services::create_profile(&state, identity, payload).await? {
        CreateOutcome::Created(profile) => Ok(Json(ApiResponse::with_data(
            "profile created",
            profile.into(),
        ))),
        CreateOutcome::AlreadyExists => Err(AppError::Conflict("profile already exists".into())),
    }
}

#[instrument(skip(state))]
pub async fn view_profile(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
) -> AppResult<Json<ApiResponse<ProfileView>>> {
    Ok(Json(match services::view_profile(&state, identity).await? {
        Some(profile) => ApiResponse::with_data("profile found", profile.into()),
        None => ApiResponse {
            message: "profile not created yet".into(),
            data: None,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<ProfileResponse>>> {
    Ok(Json(
        match services::update_profile(&state, identity, payload).await? {
            UpdateOutcome::Updated(profile) => {
                ApiResponse::with_data("profile updated", profile.into())
            }
            UpdateOutcome::NotFound => ApiResponse {
                message: "profile not found".into(),
                data: None,
            },
        },
    ))
}

#[instrument(skip(state))]
pub async fn delete_profile(
    State(state): State<AppState>,
    identity: AuthenticatedIdentity,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = match services::delete_profile(&state, identity).await? {
        DeleteOutcome::Deleted => "profile deleted",
        DeleteOutcome::NothingToDelete => "nothing to delete",
    };
    Ok(Json(ApiResponse::message(message)))
}
