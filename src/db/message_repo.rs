// src/db/message_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::message::Message};

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        sender_id: Uuid,
        receiver_id: Uuid,
        message: &str,
        property_id: Option<Uuid>,
    ) -> Result<Message, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, message, property_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(message)
        .bind(property_id)
        .fetch_one(executor)
        .await?;

        Ok(created)
    }

    // A conversa inteira entre dois usuários, nos dois sentidos
    pub async fn conversation(
        &self,
        user_a: Uuid,
        user_b: Uuid,
    ) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn unread_count(&self, receiver_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND is_read = FALSE",
        )
        .bind(receiver_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // Marca como lidas todas as mensagens recebidas de um remetente
    pub async fn mark_conversation_read<'e, E>(
        &self,
        executor: E,
        receiver_id: Uuid,
        sender_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE messages SET is_read = TRUE
            WHERE receiver_id = $1 AND sender_id = $2 AND is_read = FALSE
            "#,
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    // Só o remetente pode apagar a própria mensagem
    pub async fn delete_own<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        sender_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let deleted = sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM messages WHERE id = $1 AND sender_id = $2 RETURNING id",
        )
        .bind(id)
        .bind(sender_id)
        .fetch_optional(executor)
        .await?;

        Ok(deleted.is_some())
    }

    // Faxina periódica: remove conversas além da janela de retenção
    pub async fn purge_older_than_months<'e, E>(
        &self,
        executor: E,
        months: i32,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result =
            sqlx::query("DELETE FROM messages WHERE created_at < NOW() - make_interval(months => $1)")
                .bind(months)
                .execute(executor)
                .await?;

        Ok(result.rows_affected())
    }
}
