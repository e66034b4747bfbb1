// src/db/report_repo.rs

use sqlx::{Acquire, Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::report::{Report, ReportStatistics, ReportStatus, ReportedUserEntry, StatusCount},
};

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        reporter_id: Uuid,
        reported_id: Uuid,
        reason: &str,
    ) -> Result<Report, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (reporter_id, reported_id, reason)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(reporter_id)
        .bind(reported_id)
        .bind(reason)
        .fetch_one(executor)
        .await?;

        Ok(report)
    }

    pub async fn list_all(&self) -> Result<Vec<Report>, AppError> {
        let reports =
            sqlx::query_as::<_, Report>("SELECT * FROM reports ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(reports)
    }

    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: ReportStatus,
        admin_notes: Option<&str>,
    ) -> Result<Option<Report>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let report = sqlx::query_as::<_, Report>(
            r#"
            UPDATE reports SET
                status      = $2,
                admin_notes = COALESCE($3, admin_notes),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(admin_notes)
        .fetch_optional(executor)
        .await?;

        Ok(report)
    }

    // Relatório de moderação recalculado por inteiro a cada chamada.
    // As quatro leituras compartilham uma transação (snapshot consistente).
    pub async fn statistics<'e, E>(&self, executor: E) -> Result<ReportStatistics, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
            .fetch_one(&mut *tx)
            .await?;

        let pending =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE status = 'pending'")
                .fetch_one(&mut *tx)
                .await?;

        // Top 3 mais denunciados; empate decidido pela ordem de agrupamento
        let top_reported = sqlx::query_as::<_, ReportedUserEntry>(
            r#"
            SELECT
                r.reported_id,
                u.email,
                u.full_name,
                COUNT(*) AS report_count
            FROM reports r
            LEFT JOIN users u ON u.id = r.reported_id
            GROUP BY r.reported_id, u.email, u.full_name
            ORDER BY report_count DESC
            LIMIT 3
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        let by_status = sqlx::query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM reports
            GROUP BY status
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ReportStatistics {
            total,
            pending,
            top_reported,
            by_status,
        })
    }
}
