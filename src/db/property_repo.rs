// src/db/property_repo.rs

use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        listing::OwnerSummary,
        property::{Property, PropertyUnit, RentPeriod},
    },
};

#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  IMÓVEIS
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        &self,
        executor: E,
        owner_id: Uuid,
        property_type: &str,
        name: &str,
        address: &str,
        lat: Option<f64>,
        lng: Option<f64>,
        description: Option<&str>,
        photos: Option<&Value>,
        equipments: Option<&Value>,
        rent_amount: Option<Decimal>,
    ) -> Result<Property, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let property = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, property_type, name, address, lat, lng,
                description, photos, equipments, rent_amount
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(property_type)
        .bind(name)
        .bind(address)
        .bind(lat)
        .bind(lng)
        .bind(description)
        .bind(photos)
        .bind(equipments)
        .bind(rent_amount)
        .fetch_one(executor)
        .await?;

        Ok(property)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(property)
    }

    // A checagem de posse acontece no predicado: zero linhas cobre tanto
    // "não existe" quanto "não é do dono".
    pub async fn exists_owned<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM properties WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await?;

        Ok(row.is_some())
    }

    // Atualização parcial: campos ausentes mantêm o valor atual
    #[allow(clippy::too_many_arguments)]
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        owner_id: Uuid,
        property_type: Option<&str>,
        name: Option<&str>,
        address: Option<&str>,
        lat: Option<f64>,
        lng: Option<f64>,
        description: Option<&str>,
        photos: Option<&Value>,
        equipments: Option<&Value>,
        rent_amount: Option<Decimal>,
    ) -> Result<Option<Property>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let property = sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties SET
                property_type = COALESCE($3, property_type),
                name          = COALESCE($4, name),
                address       = COALESCE($5, address),
                lat           = COALESCE($6, lat),
                lng           = COALESCE($7, lng),
                description   = COALESCE($8, description),
                photos        = COALESCE($9, photos),
                equipments    = COALESCE($10, equipments),
                rent_amount   = COALESCE($11, rent_amount),
                updated_at    = NOW()
            WHERE id = $1 AND owner_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(property_type)
        .bind(name)
        .bind(address)
        .bind(lat)
        .bind(lng)
        .bind(description)
        .bind(photos)
        .bind(equipments)
        .bind(rent_amount)
        .fetch_optional(executor)
        .await?;

        Ok(property)
    }

    // O ON DELETE CASCADE do schema leva as unidades junto
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
            "DELETE FROM properties WHERE id = $1 AND owner_id = $2 RETURNING id",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await?;

        Ok(deleted.is_some())
    }

    // Liga/desliga a publicação. `published_at` só é carimbado na transição
    // para publicado; despublicar preserva o carimbo anterior.
    pub async fn set_publication<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        owner_id: Uuid,
        publish: bool,
    ) -> Result<Option<Property>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let property = sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties SET
                is_published = $3,
                status       = CASE WHEN $3 THEN 'published' ELSE 'draft' END,
                published_at = CASE
                    WHEN $3 AND NOT is_published THEN NOW()
                    ELSE published_at
                END,
                updated_at   = NOW()
            WHERE id = $1 AND owner_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(publish)
        .fetch_optional(executor)
        .await?;

        Ok(property)
    }

    // Vitrine pública: publicados pelo flag novo ou pelo status legado
    pub async fn list_published(&self) -> Result<Vec<Property>, AppError> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT * FROM properties
            WHERE is_published = TRUE OR status = 'published'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, AppError> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    // =========================================================================
    //  UNIDADES
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn add_unit<'e, E>(
        &self,
        executor: E,
        property_id: Uuid,
        unit_type: &str,
        unit_number: &str,
        monthly_rent: Decimal,
        area_sqm: Option<Decimal>,
        bedrooms: Option<i32>,
        bathrooms: Option<i32>,
        is_available: Option<bool>,
        rent_period: Option<RentPeriod>,
    ) -> Result<PropertyUnit, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let unit = sqlx::query_as::<_, PropertyUnit>(
            r#"
            INSERT INTO property_units (
                property_id, unit_type, unit_number, monthly_rent,
                area_sqm, bedrooms, bathrooms, is_available, rent_period
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(unit_type)
        .bind(unit_number)
        .bind(monthly_rent)
        .bind(area_sqm)
        .bind(bedrooms)
        .bind(bathrooms)
        .bind(is_available)
        .bind(rent_period)
        .fetch_one(executor)
        .await?;

        Ok(unit)
    }

    pub async fn units_for_property(&self, property_id: Uuid) -> Result<Vec<PropertyUnit>, AppError> {
        let units = sqlx::query_as::<_, PropertyUnit>(
            "SELECT * FROM property_units WHERE property_id = $1 ORDER BY unit_number ASC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(units)
    }

    // Busca em lote para montar a vitrine sem N+1
    pub async fn units_for_properties(
        &self,
        property_ids: &[Uuid],
    ) -> Result<Vec<PropertyUnit>, AppError> {
        let units = sqlx::query_as::<_, PropertyUnit>(
            "SELECT * FROM property_units WHERE property_id = ANY($1) ORDER BY unit_number ASC",
        )
        .bind(property_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(units)
    }

    // Unidade cuja cadeia unidade -> imóvel pertence ao dono informado
    pub async fn find_unit_owned<'e, E>(
        &self,
        executor: E,
        unit_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<PropertyUnit>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let unit = sqlx::query_as::<_, PropertyUnit>(
            r#"
            SELECT u.* FROM property_units u
            JOIN properties p ON p.id = u.property_id
            WHERE u.id = $1 AND p.owner_id = $2
            "#,
        )
        .bind(unit_id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await?;

        Ok(unit)
    }

    // =========================================================================
    //  PROPRIETÁRIO (resumo para o anúncio)
    // =========================================================================

    pub async fn owner_summary(&self, owner_id: Uuid) -> Result<Option<OwnerSummary>, AppError> {
        let owner = sqlx::query_as::<_, OwnerSummary>(
            r#"
            SELECT
                u.full_name,
                op.company_name,
                COALESCE(op.is_verified, FALSE) AS is_verified
            FROM users u
            LEFT JOIN owner_profiles op ON op.user_id = u.id
            WHERE u.id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }
}
