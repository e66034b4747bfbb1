// src/handlers/messages.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::message::{Message, UnreadCount},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    pub receiver_id: Uuid,

    #[validate(length(min = 1, message = "A mensagem não pode ser vazia."))]
    #[schema(example = "Bonjour, la chambre est-elle toujours disponible ?")]
    pub message: String,

    // Anúncio ao qual a conversa se refere, se houver
    pub property_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadPayload {
    pub sender_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    pub updated: u64,
}

// POST /api/messages
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Messages",
    request_body = SendMessagePayload,
    responses(
        (status = 201, description = "Mensagem enviada", body = Message),
        (status = 404, description = "Destinatário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn send_message(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<SendMessagePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let message = app_state
        .message_service
        .send(
            user.0.id,
            payload.receiver_id,
            &payload.message,
            payload.property_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

// GET /api/messages/conversation/{user_id}
#[utoipa::path(
    get,
    path = "/api/messages/conversation/{user_id}",
    tag = "Messages",
    params(("user_id" = Uuid, Path, description = "O outro participante da conversa")),
    responses(
        (status = 200, description = "Conversa em ordem cronológica", body = Vec<Message>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_conversation(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(other_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let messages = app_state
        .message_service
        .conversation(user.0.id, other_id)
        .await?;
    Ok((StatusCode::OK, Json(messages)))
}

// GET /api/messages/unread
#[utoipa::path(
    get,
    path = "/api/messages/unread",
    tag = "Messages",
    responses(
        (status = 200, description = "Total de mensagens não lidas", body = UnreadCount)
    ),
    security(("api_jwt" = []))
)]
pub async fn unread_count(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let unread = app_state.message_service.unread_count(user.0.id).await?;
    Ok((StatusCode::OK, Json(UnreadCount { unread })))
}

// PATCH /api/messages/read
#[utoipa::path(
    patch,
    path = "/api/messages/read",
    tag = "Messages",
    request_body = MarkReadPayload,
    responses(
        (status = 200, description = "Conversa marcada como lida", body = MarkReadResponse)
    ),
    security(("api_jwt" = []))
)]
pub async fn mark_conversation_read(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<MarkReadPayload>,
) -> Result<impl IntoResponse, AppError> {
    let updated = app_state
        .message_service
        .mark_conversation_read(user.0.id, payload.sender_id)
        .await?;
    Ok((StatusCode::OK, Json(MarkReadResponse { updated })))
}

// DELETE /api/messages/{id}
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = Uuid, Path, description = "ID da mensagem")),
    responses(
        (status = 204, description = "Mensagem apagada pelo remetente"),
        (status = 404, description = "Mensagem não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_message(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.message_service.delete(id, user.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
