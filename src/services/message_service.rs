// src/services/message_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{MessageRepository, UserRepository},
    models::message::Message,
};

// Janela de retenção das conversas antes da faxina periódica
pub const RETENTION_MONTHS: i32 = 5;

#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl MessageService {
    pub fn new(repo: MessageRepository, user_repo: UserRepository, pool: PgPool) -> Self {
        Self {
            repo,
            user_repo,
            pool,
        }
    }

    pub async fn send(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        body: &str,
        property_id: Option<Uuid>,
    ) -> Result<Message, AppError> {
        // Destinatário precisa existir; a FK daria erro 500, aqui vira 404
        self.user_repo
            .find_by_id(receiver_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        self.repo
            .create(&self.pool, sender_id, receiver_id, body, property_id)
            .await
    }

    pub async fn conversation(
        &self,
        user_id: Uuid,
        other_id: Uuid,
    ) -> Result<Vec<Message>, AppError> {
        self.repo.conversation(user_id, other_id).await
    }

    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.repo.unread_count(user_id).await
    }

    pub async fn mark_conversation_read(
        &self,
        user_id: Uuid,
        sender_id: Uuid,
    ) -> Result<u64, AppError> {
        self.repo
            .mark_conversation_read(&self.pool, user_id, sender_id)
            .await
    }

    pub async fn delete(&self, id: Uuid, sender_id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_own(&self.pool, id, sender_id).await?;
        if !deleted {
            return Err(AppError::MessageNotFound);
        }
        Ok(())
    }

    // Chamado pela task de fundo; devolve quantas linhas caíram
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        self.repo
            .purge_older_than_months(&self.pool, RETENTION_MONTHS)
            .await
    }
}
