// src/services/property_service.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PropertyRepository,
    models::{
        listing::{OwnerSummary, PropertyListing},
        property::{Property, PropertyUnit, RentPeriod},
    },
    services::listing::build_listing,
};

// Dados de uma unidade já validados na fronteira da API
#[derive(Debug, Clone)]
pub struct UnitInput {
    pub unit_type: String,
    pub unit_number: String,
    pub monthly_rent: Decimal,
    pub area_sqm: Option<Decimal>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub is_available: Option<bool>,
    pub rent_period: Option<RentPeriod>,
}

// Campos mutáveis de um imóvel (atualização parcial)
#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub property_type: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: Option<String>,
    pub photos: Option<Value>,
    pub equipments: Option<Value>,
    pub rent_amount: Option<Decimal>,
}

#[derive(Clone)]
pub struct PropertyService {
    repo: PropertyRepository,
    pool: PgPool,
    public_base_url: String,
}

impl PropertyService {
    pub fn new(repo: PropertyRepository, pool: PgPool, public_base_url: String) -> Self {
        Self {
            repo,
            pool,
            public_base_url,
        }
    }

    // Criar o imóvel e as unidades iniciais é uma operação só: se uma
    // unidade falhar, o imóvel não fica pela metade.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
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
        units: Vec<UnitInput>,
    ) -> Result<(Property, Vec<PropertyUnit>), AppError> {
        for unit in &units {
            Self::check_unit_rent(unit)?;
        }

        let mut tx = self.pool.begin().await?;

        let property = self
            .repo
            .create(
                &mut *tx,
                owner_id,
                property_type,
                name,
                address,
                lat,
                lng,
                description,
                photos,
                equipments,
                rent_amount,
            )
            .await?;

        let mut created_units = Vec::with_capacity(units.len());
        for unit in &units {
            let created = self
                .repo
                .add_unit(
                    &mut *tx,
                    property.id,
                    &unit.unit_type,
                    &unit.unit_number,
                    unit.monthly_rent,
                    unit.area_sqm,
                    unit.bedrooms,
                    unit.bathrooms,
                    unit.is_available,
                    unit.rent_period,
                )
                .await?;
            created_units.push(created);
        }

        tx.commit().await?;

        Ok((property, created_units))
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        patch: PropertyPatch,
    ) -> Result<Property, AppError> {
        self.repo
            .update(
                &self.pool,
                id,
                owner_id,
                patch.property_type.as_deref(),
                patch.name.as_deref(),
                patch.address.as_deref(),
                patch.lat,
                patch.lng,
                patch.description.as_deref(),
                patch.photos.as_ref(),
                patch.equipments.as_ref(),
                patch.rent_amount,
            )
            .await?
            .ok_or(AppError::PropertyNotFound)
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(&self.pool, id, owner_id).await?;
        if !deleted {
            return Err(AppError::PropertyNotFound);
        }
        Ok(())
    }

    // Posse verificada e inserções na mesma transação
    pub async fn add_units(
        &self,
        property_id: Uuid,
        owner_id: Uuid,
        units: Vec<UnitInput>,
    ) -> Result<Vec<PropertyUnit>, AppError> {
        for unit in &units {
            Self::check_unit_rent(unit)?;
        }

        let mut tx = self.pool.begin().await?;

        if !self.repo.exists_owned(&mut *tx, property_id, owner_id).await? {
            return Err(AppError::PropertyNotFound);
        }

        let mut created = Vec::with_capacity(units.len());
        for unit in &units {
            let row = self
                .repo
                .add_unit(
                    &mut *tx,
                    property_id,
                    &unit.unit_type,
                    &unit.unit_number,
                    unit.monthly_rent,
                    unit.area_sqm,
                    unit.bedrooms,
                    unit.bathrooms,
                    unit.is_available,
                    unit.rent_period,
                )
                .await?;
            created.push(row);
        }

        tx.commit().await?;

        Ok(created)
    }

    pub async fn set_publication(
        &self,
        id: Uuid,
        owner_id: Uuid,
        publish: bool,
    ) -> Result<Property, AppError> {
        self.repo
            .set_publication(&self.pool, id, owner_id, publish)
            .await?
            .ok_or(AppError::PropertyNotFound)
    }

    // =========================================================================
    //  VITRINE (view-models)
    // =========================================================================

    pub async fn public_listings(&self) -> Result<Vec<PropertyListing>, AppError> {
        let properties = self.repo.list_published().await?;
        self.assemble_listings(properties).await
    }

    pub async fn public_listing(&self, id: Uuid) -> Result<PropertyListing, AppError> {
        let property = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        // A vitrine pública só enxerga o que está publicado
        let published =
            property.is_published || property.status.as_deref() == Some("published");
        if !published {
            return Err(AppError::PropertyNotFound);
        }

        let units = self.repo.units_for_property(property.id).await?;
        let owner = self.repo.owner_summary(property.owner_id).await?;

        Ok(build_listing(property, units, owner, &self.public_base_url))
    }

    // O dono enxerga os próprios imóveis publicados ou não
    pub async fn owner_listings(&self, owner_id: Uuid) -> Result<Vec<PropertyListing>, AppError> {
        let properties = self.repo.list_by_owner(owner_id).await?;
        self.assemble_listings(properties).await
    }

    async fn assemble_listings(
        &self,
        properties: Vec<Property>,
    ) -> Result<Vec<PropertyListing>, AppError> {
        let ids: Vec<Uuid> = properties.iter().map(|p| p.id).collect();
        let all_units = if ids.is_empty() {
            Vec::new()
        } else {
            self.repo.units_for_properties(&ids).await?
        };

        let mut units_by_property: HashMap<Uuid, Vec<PropertyUnit>> = HashMap::new();
        for unit in all_units {
            units_by_property
                .entry(unit.property_id)
                .or_default()
                .push(unit);
        }

        // Cache de resumos para não repetir a consulta por dono
        let mut owners: HashMap<Uuid, Option<OwnerSummary>> = HashMap::new();

        let mut listings = Vec::with_capacity(properties.len());
        for property in properties {
            let owner = match owners.get(&property.owner_id) {
                Some(cached) => cached.clone(),
                None => {
                    let summary = self.repo.owner_summary(property.owner_id).await?;
                    owners.insert(property.owner_id, summary.clone());
                    summary
                }
            };
            let units = units_by_property.remove(&property.id).unwrap_or_default();
            listings.push(build_listing(property, units, owner, &self.public_base_url));
        }

        Ok(listings)
    }

    fn check_unit_rent(unit: &UnitInput) -> Result<(), AppError> {
        if unit.monthly_rent <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(
                "O aluguel da unidade deve ser positivo.".to_string(),
            ));
        }
        Ok(())
    }
}
