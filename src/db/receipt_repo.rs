// src/db/receipt_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::receipt::{Receipt, ReceiptDetail},
};

#[derive(Clone)]
pub struct ReceiptRepository {
    pool: PgPool,
}

impl ReceiptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Ano e mês correntes pelo relógio do banco. NOW() é fixo dentro da
    // transação, então o período lido aqui, o predicado da contagem e o
    // número formatado nunca divergem, mesmo na virada do mês.
    pub async fn current_period<'e, E>(&self, executor: E) -> Result<(i32, u32), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (year, month) = sqlx::query_as::<_, (i32, i32)>(
            "SELECT EXTRACT(YEAR FROM NOW())::INT, EXTRACT(MONTH FROM NOW())::INT",
        )
        .fetch_one(executor)
        .await?;

        Ok((year, month as u32))
    }

    // Quantos recibos já foram emitidos no mês-calendário corrente.
    // Deve rodar na mesma transação do INSERT, com o lock consultivo
    // do bucket (ano, mês) já tomado; ver ReceiptService.
    pub async fn count_current_month<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM receipts
            WHERE date_trunc('month', created_at) = date_trunc('month', NOW())
            "#,
        )
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    // O locatário realmente mora numa unidade deste imóvel?
    pub async fn tenant_belongs_to_property<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        property_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT t.id FROM tenants t
            JOIN property_units u ON u.id = t.unit_id
            WHERE t.id = $1 AND u.property_id = $2
            "#,
        )
        .bind(tenant_id)
        .bind(property_id)
        .fetch_optional(executor)
        .await?;

        Ok(row.is_some())
    }

    // O solicitante pode ver os recibos deste contrato? Vale para o dono
    // do imóvel e para o próprio locatário (quando tem conta).
    pub async fn tenant_visible_to(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, AppError> {
        let row = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT t.id FROM tenants t
            JOIN property_units u ON u.id = t.unit_id
            JOIN properties p ON p.id = u.property_id
            WHERE t.id = $1 AND (p.owner_id = $2 OR t.user_id = $2)
            "#,
        )
        .bind(tenant_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        property_id: Uuid,
        month: i32,
        year: i32,
        amount: Decimal,
        payment_date: NaiveDate,
        payment_method: &str,
        receipt_number: &str,
        notes: Option<&str>,
    ) -> Result<Receipt, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let receipt = sqlx::query_as::<_, Receipt>(
            r#"
            INSERT INTO receipts (
                tenant_id, property_id, month, year, amount,
                payment_date, payment_method, receipt_number, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(tenant_id)
        .bind(property_id)
        .bind(month)
        .bind(year)
        .bind(amount)
        .bind(payment_date)
        .bind(payment_method)
        .bind(receipt_number)
        .bind(notes)
        .fetch_one(executor)
        .await?;

        Ok(receipt)
    }

    // Recibo completamente desnormalizado para renderização: locatário,
    // imóvel, proprietário (com perfil) e a unidade do contrato.
    pub async fn find_detail(&self, id: Uuid) -> Result<Option<ReceiptDetail>, AppError> {
        let detail = sqlx::query_as::<_, ReceiptDetail>(
            r#"
            SELECT
                r.id, r.receipt_number, r.month, r.year, r.amount,
                r.payment_date, r.payment_method, r.notes, r.created_at,
                r.tenant_id,
                t.user_id   AS tenant_user_id,
                t.full_name AS tenant_name,
                t.email     AS tenant_email,
                t.phone     AS tenant_phone,
                r.property_id,
                p.name      AS property_name,
                p.address   AS property_address,
                u.unit_number,
                u.unit_type,
                p.owner_id,
                ow.full_name     AS owner_name,
                ow.email         AS owner_email,
                op.company_name  AS owner_company,
                op.signature_url AS owner_signature_url
            FROM receipts r
            LEFT JOIN tenants t         ON t.id = r.tenant_id
            LEFT JOIN properties p      ON p.id = r.property_id
            LEFT JOIN users ow          ON ow.id = p.owner_id
            LEFT JOIN owner_profiles op ON op.user_id = p.owner_id
            LEFT JOIN property_units u  ON u.id = t.unit_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn find_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Receipt>, AppError> {
        let receipts = sqlx::query_as::<_, Receipt>(
            "SELECT * FROM receipts WHERE tenant_id = $1 ORDER BY created_at DESC",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(receipts)
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Receipt>, AppError> {
        let receipts = sqlx::query_as::<_, Receipt>(
            r#"
            SELECT r.* FROM receipts r
            JOIN properties p ON p.id = r.property_id
            WHERE p.owner_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(receipts)
    }

    // Recibos são imutáveis depois de emitidos; a única mutação é a exclusão
    pub async fn delete_owned<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let deleted = sqlx::query_scalar::<_, Uuid>(
            r#"
            DELETE FROM receipts r
            USING properties p
            WHERE r.id = $1 AND r.property_id = p.id AND p.owner_id = $2
            RETURNING r.id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await?;

        Ok(deleted.is_some())
    }
}
