// src/models/message.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,

    pub sender_id: Uuid,
    pub receiver_id: Uuid,

    #[schema(example = "Bonjour, la chambre est-elle toujours disponible ?")]
    pub message: String,

    pub property_id: Option<Uuid>,

    pub is_read: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCount {
    #[schema(example = 3)]
    pub unread: i64,
}
