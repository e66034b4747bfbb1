// src/models/receipt.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: Uuid,

    pub tenant_id: Uuid,
    pub property_id: Uuid,

    #[schema(example = 1, minimum = 1, maximum = 12)]
    pub month: i32,
    #[schema(example = 2025)]
    pub year: i32,

    #[schema(example = "75000.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2025-01-05")]
    pub payment_date: NaiveDate,

    #[schema(example = "wave")]
    pub payment_method: String,

    #[schema(example = "REC-202501-0001")]
    pub receipt_number: String,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

// Recibo desnormalizado para renderização (o gerador de PDF é um
// colaborador externo e recebe esta estrutura pronta).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDetail {
    pub id: Uuid,
    pub receipt_number: String,
    pub month: i32,
    pub year: i32,
    pub amount: Decimal,

    #[schema(value_type = String, format = Date)]
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,

    // Locatário
    pub tenant_id: Uuid,
    pub tenant_user_id: Option<Uuid>,
    pub tenant_name: String,
    pub tenant_email: Option<String>,
    pub tenant_phone: Option<String>,

    // Imóvel e unidade
    pub property_id: Uuid,
    pub property_name: String,
    pub property_address: String,
    pub unit_number: Option<String>,
    pub unit_type: Option<String>,

    // Proprietário
    pub owner_id: Uuid,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_company: Option<String>,
    pub owner_signature_url: Option<String>,
}
