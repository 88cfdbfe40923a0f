use crate::auth::repo::{PgTokenRepository, PgUserRepository, TokenRepository, UserRepository};
use crate::config::AppConfig;
use crate::profiles::repo::{PgProfileRepository, ProfileRepository};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub tokens: Arc<dyn TokenRepository>,
}

impl AppState {
    /// Postgres-backed state sharing one pool across repositories.
    pub fn postgres(config: Arc<AppConfig>, db: PgPool) -> Self {
        Self::from_parts(
            config,
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgProfileRepository::new(db.clone())),
            Arc::new(PgTokenRepository::new(db)),
        )
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        tokens: Arc<dyn TokenRepository>,
    ) -> Self {
        Self {
            config,
            users,
            profiles,
            tokens,
        }
    }
}
