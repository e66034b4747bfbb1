// src/services/user_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, db::UserRepository, models::user::User};

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    pool: PgPool,
}

impl UserService {
    pub fn new(repo: UserRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repo.list_all().await
    }

    pub async fn set_blocked(&self, id: Uuid, blocked: bool) -> Result<User, AppError> {
        self.repo
            .set_blocked(&self.pool, id, blocked)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
