// src/models/listing.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::property::{PropertyUnit, RentPeriod};

// Status binário exibido nas vitrines públicas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Available,
    Occupied,
}

// Resumo do proprietário anexado ao anúncio (sem dados sensíveis)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub full_name: Option<String>,
    pub company_name: Option<String>,
    pub is_verified: bool,
}

/// View-model pronto para exibição: o imóvel cru + agregados calculados
/// a partir das unidades (aluguel mínimo, disponibilidade, somatórios).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub property_type: String,
    pub name: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: Option<String>,

    // Fotos já normalizadas: URLs absolutas, sem duplicatas
    pub photos: Vec<String>,
    pub equipments: Vec<String>,

    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,

    // Mínimo entre o aluguel do imóvel (legado) e os das unidades
    #[schema(example = "75000.00")]
    pub rent_amount: Decimal,
    pub primary_rent_period: RentPeriod,

    pub total_units: u32,
    pub available_units: u32,
    pub display_status: DisplayStatus,

    pub cover_photo: Option<String>,

    pub aggregated_bedrooms: i32,
    pub aggregated_area: Decimal,
    pub aggregated_bathrooms: i32,

    pub units: Vec<PropertyUnit>,
    pub owner: Option<OwnerSummary>,

    pub created_at: DateTime<Utc>,
}
