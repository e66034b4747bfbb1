// src/handlers/tenants.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{coerce::lenient_decimal_opt, error::AppError},
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::tenant::{Tenant, TenantStatus},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantPayload {
    pub unit_id: Uuid,

    // Locatário pode ou não ter conta na plataforma
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, message = "O nome do locatário é obrigatório."))]
    #[schema(example = "Awa Ndiaye")]
    pub full_name: String,

    #[validate(email(message = "E-mail inválido."))]
    pub email: Option<String>,
    pub phone: Option<String>,

    // Sem valor informado, o contrato herda o aluguel da unidade
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    #[schema(value_type = Option<f64>, example = "75000")]
    pub monthly_rent: Option<Decimal>,

    pub move_in_date: NaiveDate,
    pub status: Option<TenantStatus>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantPayload {
    #[validate(length(min = 1, message = "O nome do locatário é obrigatório."))]
    pub full_name: Option<String>,
    #[validate(email(message = "E-mail inválido."))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    #[schema(value_type = Option<f64>)]
    pub monthly_rent: Option<Decimal>,
    pub move_in_date: Option<NaiveDate>,
    pub status: Option<TenantStatus>,
}

// POST /api/tenants
#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = "Tenants",
    request_body = CreateTenantPayload,
    responses(
        (status = 201, description = "Locatário atribuído à unidade", body = Tenant),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Unidade não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_tenant(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTenantPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tenant = app_state
        .tenant_service
        .create(
            user.0.id,
            payload.unit_id,
            payload.user_id,
            &payload.full_name,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.monthly_rent,
            payload.move_in_date,
            payload.status,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(tenant)))
}

// GET /api/tenants
#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = "Tenants",
    responses(
        (status = 200, description = "Locatários das unidades do dono", body = Vec<Tenant>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tenants(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let tenants = app_state.tenant_service.list_for_owner(user.0.id).await?;
    Ok((StatusCode::OK, Json(tenants)))
}

// PATCH /api/tenants/{id}
#[utoipa::path(
    patch,
    path = "/api/tenants/{id}",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "ID do locatário")),
    request_body = UpdateTenantPayload,
    responses(
        (status = 200, description = "Contrato atualizado", body = Tenant),
        (status = 404, description = "Locatário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_tenant(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTenantPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tenant = app_state
        .tenant_service
        .update(
            id,
            user.0.id,
            payload.full_name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.monthly_rent,
            payload.move_in_date,
            payload.status,
        )
        .await?;

    Ok((StatusCode::OK, Json(tenant)))
}

// DELETE /api/tenants/{id}
#[utoipa::path(
    delete,
    path = "/api/tenants/{id}",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "ID do locatário")),
    responses(
        (status = 204, description = "Contrato encerrado e removido"),
        (status = 404, description = "Locatário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_tenant(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.tenant_service.delete(id, user.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
