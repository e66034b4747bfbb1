// src/db/tenant_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::tenant::{Tenant, TenantStatus},
};

// A posse de um locatário é indireta: locatário -> unidade -> imóvel -> dono.
// Todas as mutações repetem essa cadeia no predicado SQL.
#[derive(Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Option<Uuid>,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        unit_id: Uuid,
        monthly_rent: Decimal,
        move_in_date: NaiveDate,
        status: TenantStatus,
    ) -> Result<Tenant, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (
                user_id, full_name, email, phone, unit_id,
                monthly_rent, move_in_date, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(unit_id)
        .bind(monthly_rent)
        .bind(move_in_date)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(tenant)
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Tenant>, AppError> {
        let tenants = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT t.* FROM tenants t
            JOIN property_units u ON u.id = t.unit_id
            JOIN properties p ON p.id = u.property_id
            WHERE p.owner_id = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tenants)
    }

    // Atualização parcial com posse no predicado. O aluguel efetivo pode
    // divergir do aluguel da unidade a partir daqui; não há sincronização.
    #[allow(clippy::too_many_arguments)]
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        owner_id: Uuid,
        full_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        monthly_rent: Option<Decimal>,
        move_in_date: Option<NaiveDate>,
        status: Option<TenantStatus>,
    ) -> Result<Option<Tenant>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            UPDATE tenants t SET
                full_name    = COALESCE($3, t.full_name),
                email        = COALESCE($4, t.email),
                phone        = COALESCE($5, t.phone),
                monthly_rent = COALESCE($6, t.monthly_rent),
                move_in_date = COALESCE($7, t.move_in_date),
                status       = COALESCE($8, t.status),
                updated_at   = NOW()
            FROM property_units u
            JOIN properties p ON p.id = u.property_id
            WHERE t.id = $1 AND t.unit_id = u.id AND p.owner_id = $2
            RETURNING t.*
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(monthly_rent)
        .bind(move_in_date)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(tenant)
    }

    pub async fn delete<'e, E>(
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
            DELETE FROM tenants t
            USING property_units u, properties p
            WHERE t.id = $1
              AND t.unit_id = u.id
              AND u.property_id = p.id
              AND p.owner_id = $2
            RETURNING t.id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await?;

        Ok(deleted.is_some())
    }
}
