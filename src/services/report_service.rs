// src/services/report_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ReportRepository, UserRepository},
    models::report::{Report, ReportStatistics, ReportStatus},
};

#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl ReportService {
    pub fn new(repo: ReportRepository, user_repo: UserRepository, pool: PgPool) -> Self {
        Self {
            repo,
            user_repo,
            pool,
        }
    }

    pub async fn create(
        &self,
        reporter_id: Uuid,
        reported_id: Uuid,
        reason: &str,
    ) -> Result<Report, AppError> {
        self.user_repo
            .find_by_id(reported_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        self.repo
            .create(&self.pool, reporter_id, reported_id, reason)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Report>, AppError> {
        self.repo.list_all().await
    }

    pub async fn moderate(
        &self,
        id: Uuid,
        status: ReportStatus,
        admin_notes: Option<&str>,
    ) -> Result<Report, AppError> {
        self.repo
            .update_status(&self.pool, id, status, admin_notes)
            .await?
            .ok_or(AppError::ReportNotFound)
    }

    pub async fn statistics(&self) -> Result<ReportStatistics, AppError> {
        self.repo.statistics(&self.pool).await
    }
}
