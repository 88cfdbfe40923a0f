use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;
use validator::Validate;

use crate::profiles::repo_types::{Profile, ProfileWithEmail};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Request body for creating a profile.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 3, max = 30, message = "name must be 3-30 characters"))]
    pub name: String,

    #[validate(regex(
        path = "*crate::validation::MOBILE_REGEX",
        message = "mobile must be a valid phone number"
    ))]
    pub mobile: String,

    #[validate(regex(
        path = "*crate::validation::GENDER_REGEX",
        message = "gender must be male or female"
    ))]
    pub gender: String,

    #[validate(custom(function = "crate::validation::validate_dob"))]
    pub dob: String,
}

/// Request body for a partial update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 30, message = "name must be 3-30 characters"))]
    pub name: Option<String>,

    #[validate(regex(
        path = "*crate::validation::MOBILE_REGEX",
        message = "mobile must be a valid phone number"
    ))]
    pub mobile: Option<String>,

    #[validate(regex(
        path = "*crate::validation::GENDER_REGEX",
        message = "gender must be male or female"
    ))]
    pub gender: Option<String>,

    #[validate(custom(function = "crate::validation::validate_dob"))]
    pub dob: Option<String>,
}

/// Profile as returned after create and update.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub mobile: String,
    pub gender: String,
    #[serde(with = "iso_date")]
    pub dob: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            name: p.name,
            mobile: p.mobile,
            gender: p.gender,
            dob: p.dob,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Profile as shown to its owner, with the account email.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub gender: String,
    #[serde(with = "iso_date")]
    pub dob: Date,
}

impl From<ProfileWithEmail> for ProfileView {
    fn from(p: ProfileWithEmail) -> Self {
        Self {
            name: p.name,
            email: p.email,
            mobile: p.mobile,
            gender: p.gender,
            dob: p.dob,
        }
    }
}
