// src/models/property.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Período de cobrança de uma unidade. Os valores seguem o vocabulário
// histórico da plataforma (francês), que já está persistido no banco.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "rent_period", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RentPeriod {
    Jour,
    Semaine,
    #[default]
    Mois,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,

    pub owner_id: Uuid,

    #[schema(example = "appartement")]
    pub property_type: String,

    #[schema(example = "Résidence Teranga")]
    pub name: String,

    #[schema(example = "Ouakam, Dakar")]
    pub address: String,

    pub lat: Option<f64>,
    pub lng: Option<f64>,

    pub description: Option<String>,

    // Linhas legadas podem trazer o array JSON codificado como string;
    // a normalização acontece no view-model, nunca aqui.
    #[schema(value_type = Option<Vec<String>>)]
    pub photos: Option<Value>,

    #[schema(value_type = Option<Vec<String>>)]
    pub equipments: Option<Value>,

    // Aluguel do imóvel inteiro (legado, anterior ao modelo de unidades)
    #[schema(example = "250000.00")]
    pub rent_amount: Option<Decimal>,

    // Coluna de status legada ('published' / 'draft')
    pub status: Option<String>,

    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUnit {
    pub id: Uuid,

    pub property_id: Uuid,

    #[schema(example = "chambre")]
    pub unit_type: String,

    #[schema(example = "A-02")]
    pub unit_number: String,

    #[schema(example = "75000.00")]
    pub monthly_rent: Decimal,

    pub area_sqm: Option<Decimal>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,

    // NULL conta como disponível; só `false` explícito marca ocupação
    pub is_available: Option<bool>,

    pub rent_period: Option<RentPeriod>,

    pub created_at: DateTime<Utc>,
}
