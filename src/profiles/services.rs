use tracing::{info, warn};
use validator::Validate;

use crate::{
    auth::AuthenticatedIdentity,
    error::{AppError, AppResult},
    profiles::{
        dto::{CreateProfileRequest, UpdateProfileRequest},
        repo_types::{NewProfile, Profile, ProfilePatch, ProfileWithEmail},
    },
    state::AppState,
    validation::normalize_date,
};

#[derive(Debug)]
pub enum CreateOutcome {
    Created(Profile),
    AlreadyExists,
}

#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Profile),
    NotFound,
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    NothingToDelete,
}

fn parse_dob(raw: &str) -> AppResult<time::Date> {
    normalize_date(raw)
        .ok_or_else(|| AppError::Validation(vec!["dob must be a valid date (YYYY-MM-DD)".into()]))
}

pub async fn create_profile(
    state: &AppState,
    identity: AuthenticatedIdentity,
    payload: CreateProfileRequest,
) -> AppResult<CreateOutcome> {
    payload.validate()?;
    let dob = parse_dob(&payload.dob)?;

    if state.profiles.find_by_user(identity.user_id).await?.is_some() {
        warn!(user_id = %identity.user_id, "profile already exists");
        return Ok(CreateOutcome::AlreadyExists);
    }

    let created = state
        .profiles
        .create(NewProfile {
            user_id: identity.user_id,
            name: payload.name,
            mobile: payload.mobile,
            gender: payload.gender.to_lowercase(),
            dob,
        })
        .await?;

    Ok(match created {
        Some(profile) => {
            info!(user_id = %identity.user_id, profile_id = %profile.id, "profile created");
            CreateOutcome::Created(profile)
        }
        None => {
            warn!(user_id = %identity.user_id, "concurrent profile create lost");
            CreateOutcome::AlreadyExists
        }
    })
}

pub async fn view_profile(
    state: &AppState,
    identity: AuthenticatedIdentity,
) -> AppResult<Option<ProfileWithEmail>> {
    Ok(state.profiles.find_with_email(identity.user_id).await?)
}

pub async fn update_profile(
    state: &AppState,
    identity: AuthenticatedIdentity,
    payload: UpdateProfileRequest,
) -> AppResult<UpdateOutcome> {
    payload.validate()?;

    let patch = ProfilePatch {
        name: payload.name,
        mobile: payload.mobile,
        gender: payload.gender.map(|g| g.to_lowercase()),
        dob: payload.dob.as_deref().map(parse_dob).transpose()?,
    };
    if patch.is_empty() {
        warn!(user_id = %identity.user_id, "empty profile update");
        return Err(AppError::Domain("require at least one valid field".into()));
    }

    Ok(match state.profiles.update(identity.user_id, patch).await? {
        Some(profile) => {
            info!(user_id = %identity.user_id, profile_id = %profile.id, "profile updated");
            UpdateOutcome::Updated(profile)
        }
        None => UpdateOutcome::NotFound,
    })
}

pub async fn delete_profile(
    state: &AppState,
    identity: AuthenticatedIdentity,
) -> AppResult<DeleteOutcome> {
    if state.profiles.delete(identity.user_id).await? {
        info!(user_id = %identity.user_id, "profile deleted");
        Ok(DeleteOutcome::Deleted)
    } else {
        Ok(DeleteOutcome::NothingToDelete)
    }
}
