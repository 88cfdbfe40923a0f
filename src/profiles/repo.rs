use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::profiles::repo_types::{NewProfile, Profile, ProfilePatch, ProfileWithEmail};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>>;

    async fn find_with_email(&self, user_id: Uuid) -> anyhow::Result<Option<ProfileWithEmail>>;

    /// Inserts unless the user already has a profile; `None` means one existed.
    async fn create(&self, profile: NewProfile) -> anyhow::Result<Option<Profile>>;

    /// Applies the patch; `None` when the user has no profile.
    async fn update(&self, user_id: Uuid, patch: ProfilePatch) -> anyhow::Result<Option<Profile>>;

    /// `true` when a row was removed.
    async fn delete(&self, user_id: Uuid) -> anyhow::Result<bool>;
}

pub struct PgProfileRepository {
    db: PgPool,
}

impl PgProfileRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, user_id, name, mobile, gender, dob, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn find_with_email(&self, user_id: Uuid) -> anyhow::Result<Option<ProfileWithEmail>> {
        let row = sqlx::query_as::<_, ProfileWithEmail>(
            r#"
            SELECT p.name, u.email, p.mobile, p.gender, p.dob
              FROM profiles p
              JOIN users u ON u.id = p.user_id
             WHERE p.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, profile: NewProfile) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, name, mobile, gender, dob)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING id, user_id, name, mobile, gender, dob, created_at, updated_at
            "#,
        )
        .bind(profile.user_id)
        .bind(profile.name)
        .bind(profile.mobile)
        .bind(profile.gender)
        .bind(profile.dob)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, user_id: Uuid, patch: ProfilePatch) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
               SET name       = COALESCE($2, name),
                   mobile     = COALESCE($3, mobile),
                   gender     = COALESCE($4, gender),
                   dob        = COALESCE($5, dob),
                   updated_at = now()
             WHERE user_id = $1
            RETURNING id, user_id, name, mobile, gender, dob, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(patch.name)
        .bind(patch.mobile)
        .bind(patch.gender)
        .bind(patch.dob)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, user_id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
