use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Profile record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid, // unique: one profile per user
    pub name: String,
    pub mobile: String,
    pub gender: String, // "male" | "female"
    pub dob: Date,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Profile joined with its owner's email.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileWithEmail {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub gender: String,
    pub dob: Date,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: Uuid,
    pub name: String,
    pub mobile: String,
    pub gender: String,
    pub dob: Date,
}

/// Fields to overwrite; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<Date>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.mobile.is_none() && self.gender.is_none() && self.dob.is_none()
    }
}
