// src/handlers/reports.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AdminUser, AuthenticatedUser},
    models::report::{Report, ReportStatistics, ReportStatus},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportPayload {
    pub reported_id: Uuid,

    #[validate(length(min = 3, message = "Descreva o motivo da denúncia."))]
    #[schema(example = "Annonce frauduleuse")]
    pub reason: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModerateReportPayload {
    pub status: ReportStatus,
    pub admin_notes: Option<String>,
}

// POST /api/reports
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "Reports",
    request_body = CreateReportPayload,
    responses(
        (status = 201, description = "Denúncia registrada", body = Report),
        (status = 404, description = "Usuário denunciado não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_report(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateReportPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let report = app_state
        .report_service
        .create(user.0.id, payload.reported_id, &payload.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(report)))
}

// GET /api/reports (admin)
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "Todas as denúncias, mais recentes primeiro", body = Vec<Report>),
        (status = 403, description = "Apenas administradores")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_reports(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let reports = app_state.report_service.list_all().await?;
    Ok((StatusCode::OK, Json(reports)))
}

// PATCH /api/reports/{id} (admin)
#[utoipa::path(
    patch,
    path = "/api/reports/{id}",
    tag = "Reports",
    params(("id" = Uuid, Path, description = "ID da denúncia")),
    request_body = ModerateReportPayload,
    responses(
        (status = 200, description = "Denúncia moderada", body = Report),
        (status = 403, description = "Apenas administradores"),
        (status = 404, description = "Denúncia não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn moderate_report(
    State(app_state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ModerateReportPayload>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state
        .report_service
        .moderate(id, payload.status, payload.admin_notes.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

// GET /api/reports/statistics (admin)
#[utoipa::path(
    get,
    path = "/api/reports/statistics",
    tag = "Reports",
    responses(
        (status = 200, description = "Painel de moderação num snapshot consistente", body = ReportStatistics),
        (status = 403, description = "Apenas administradores")
    ),
    security(("api_jwt" = []))
)]
pub async fn report_statistics(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.report_service.statistics().await?;
    Ok((StatusCode::OK, Json(stats)))
}
