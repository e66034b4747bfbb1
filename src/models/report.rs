// src/models/report.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Dismissed,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,

    pub reporter_id: Uuid,
    pub reported_id: Uuid,

    #[schema(example = "Annonce frauduleuse")]
    pub reason: String,

    pub status: ReportStatus,
    pub admin_notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Um usuário entre os mais denunciados
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportedUserEntry {
    pub reported_id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub report_count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: ReportStatus,
    pub count: i64,
}

// Relatório completo de moderação, recalculado a cada chamada
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    pub total: i64,
    pub pending: i64,
    pub top_reported: Vec<ReportedUserEntry>,
    pub by_status: Vec<StatusCount>,
}
