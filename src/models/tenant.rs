// src/models/tenant.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tenant_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Pending,
    Terminated,
}

// Um contrato de locação. `user_id` é opcional: o locatário pode ainda
// não ter conta na plataforma.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,

    pub user_id: Option<Uuid>,

    #[schema(example = "Moussa Ndiaye")]
    pub full_name: String,

    pub email: Option<String>,
    pub phone: Option<String>,

    pub unit_id: Uuid,

    // Espelha o aluguel da unidade no momento da atribuição, mas pode
    // divergir depois (edição manual permitida)
    #[schema(example = "75000.00")]
    pub monthly_rent: Decimal,

    #[schema(value_type = String, format = Date, example = "2025-03-01")]
    pub move_in_date: NaiveDate,

    pub status: TenantStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
