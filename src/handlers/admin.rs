// src/handlers/admin.rs

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
    common::error::AppError, config::AppState, middleware::auth::AdminUser, models::user::User,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockUserPayload {
    pub is_blocked: bool,
}

// GET /api/admin/users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    responses(
        (status = 200, description = "Todos os usuários da plataforma", body = Vec<User>),
        (status = 403, description = "Apenas administradores")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_service.list_users().await?;
    Ok((StatusCode::OK, Json(users)))
}

// PATCH /api/admin/users/{id}/block
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/block",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    request_body = BlockUserPayload,
    responses(
        (status = 200, description = "Bloqueio atualizado; tokens do usuário passam a ser recusados", body = User),
        (status = 403, description = "Apenas administradores"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn set_user_blocked(
    State(app_state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlockUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_service
        .set_blocked(id, payload.is_blocked)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
