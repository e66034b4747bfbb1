// src/services/tenant_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{PropertyRepository, TenantRepository},
    models::tenant::{Tenant, TenantStatus},
};

#[derive(Clone)]
pub struct TenantService {
    repo: TenantRepository,
    property_repo: PropertyRepository,
    pool: PgPool,
}

impl TenantService {
    pub fn new(repo: TenantRepository, property_repo: PropertyRepository, pool: PgPool) -> Self {
        Self {
            repo,
            property_repo,
            pool,
        }
    }

    // Atribui um locatário a uma unidade do dono. Sem aluguel informado,
    // o contrato espelha o aluguel da unidade no momento da atribuição;
    // depois disso os dois valores vivem vidas separadas.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: Uuid,
        unit_id: Uuid,
        user_id: Option<Uuid>,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        monthly_rent: Option<Decimal>,
        move_in_date: NaiveDate,
        status: Option<TenantStatus>,
    ) -> Result<Tenant, AppError> {
        let mut tx = self.pool.begin().await?;

        let unit = self
            .property_repo
            .find_unit_owned(&mut *tx, unit_id, owner_id)
            .await?
            .ok_or(AppError::UnitNotFound)?;

        let rent = monthly_rent.unwrap_or(unit.monthly_rent);
        if rent <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(
                "O aluguel do contrato deve ser positivo.".to_string(),
            ));
        }

        let tenant = self
            .repo
            .create(
                &mut *tx,
                user_id,
                full_name,
                email,
                phone,
                unit_id,
                rent,
                move_in_date,
                status.unwrap_or(TenantStatus::Active),
            )
            .await?;

        tx.commit().await?;

        Ok(tenant)
    }

    pub async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Tenant>, AppError> {
        self.repo.list_by_owner(owner_id).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        full_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        monthly_rent: Option<Decimal>,
        move_in_date: Option<NaiveDate>,
        status: Option<TenantStatus>,
    ) -> Result<Tenant, AppError> {
        if let Some(rent) = monthly_rent {
            if rent <= Decimal::ZERO {
                return Err(AppError::InvalidAmount(
                    "O aluguel do contrato deve ser positivo.".to_string(),
                ));
            }
        }

        self.repo
            .update(
                &self.pool,
                id,
                owner_id,
                full_name,
                email,
                phone,
                monthly_rent,
                move_in_date,
                status,
            )
            .await?
            .ok_or(AppError::TenantNotFound)
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(&self.pool, id, owner_id).await?;
        if !deleted {
            return Err(AppError::TenantNotFound);
        }
        Ok(())
    }
}
