// src/handlers/receipts.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{coerce::lenient_decimal, error::AppError},
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::receipt::{Receipt, ReceiptDetail},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceiptPayload {
    pub tenant_id: Uuid,
    pub property_id: Uuid,

    // Período de referência do pagamento, não a data de emissão
    #[validate(range(min = 1, max = 12, message = "O mês deve estar entre 1 e 12."))]
    pub month: i32,
    #[validate(range(min = 2000, max = 2100, message = "Ano fora do intervalo aceito."))]
    pub year: i32,

    #[serde(deserialize_with = "lenient_decimal")]
    #[schema(value_type = f64, example = "75000")]
    pub amount: Decimal,

    pub payment_date: NaiveDate,

    #[validate(length(min = 1, message = "O meio de pagamento é obrigatório."))]
    #[schema(example = "wave")]
    pub payment_method: String,

    pub notes: Option<String>,
}

// POST /api/receipts
#[utoipa::path(
    post,
    path = "/api/receipts",
    tag = "Receipts",
    request_body = CreateReceiptPayload,
    responses(
        (status = 201, description = "Recibo emitido com número sequencial", body = Receipt),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Imóvel ou locatário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_receipt(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateReceiptPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let receipt = app_state
        .receipt_service
        .issue(
            user.0.id,
            payload.tenant_id,
            payload.property_id,
            payload.month,
            payload.year,
            payload.amount,
            payload.payment_date,
            &payload.payment_method,
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

// GET /api/receipts/{id}
#[utoipa::path(
    get,
    path = "/api/receipts/{id}",
    tag = "Receipts",
    params(("id" = Uuid, Path, description = "ID do recibo")),
    responses(
        (status = 200, description = "Detalhe desnormalizado do recibo", body = ReceiptDetail),
        (status = 403, description = "Recibo de terceiros"),
        (status = 404, description = "Recibo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_receipt(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state.receipt_service.detail(&user.0, id).await?;
    Ok((StatusCode::OK, Json(detail)))
}

// GET /api/receipts/tenant/{tenant_id}
#[utoipa::path(
    get,
    path = "/api/receipts/tenant/{tenant_id}",
    tag = "Receipts",
    params(("tenant_id" = Uuid, Path, description = "ID do locatário")),
    responses(
        (status = 200, description = "Recibos do locatário, mais recentes primeiro", body = Vec<Receipt>),
        (status = 403, description = "Locatário fora do alcance do solicitante")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tenant_receipts(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(tenant_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let receipts = app_state
        .receipt_service
        .list_for_tenant(&user.0, tenant_id)
        .await?;
    Ok((StatusCode::OK, Json(receipts)))
}

// GET /api/receipts/owner/{owner_id}
#[utoipa::path(
    get,
    path = "/api/receipts/owner/{owner_id}",
    tag = "Receipts",
    params(("owner_id" = Uuid, Path, description = "ID do dono")),
    responses(
        (status = 200, description = "Recibos emitidos pelo dono", body = Vec<Receipt>),
        (status = 403, description = "Apenas o próprio dono ou um admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_owner_receipts(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(owner_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let receipts = app_state
        .receipt_service
        .list_for_owner(&user.0, owner_id)
        .await?;
    Ok((StatusCode::OK, Json(receipts)))
}

// DELETE /api/receipts/{id}
#[utoipa::path(
    delete,
    path = "/api/receipts/{id}",
    tag = "Receipts",
    params(("id" = Uuid, Path, description = "ID do recibo")),
    responses(
        (status = 204, description = "Recibo removido"),
        (status = 404, description = "Recibo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_receipt(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.receipt_service.delete(id, user.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_com_mes(month: i32) -> CreateReceiptPayload {
        serde_json::from_value(json!({
            "tenantId": Uuid::new_v4(),
            "propertyId": Uuid::new_v4(),
            "month": month,
            "year": 2025,
            "amount": "75000.00",
            "paymentDate": "2025-01-05",
            "paymentMethod": "wave",
        }))
        .expect("payload bem formado")
    }

    #[test]
    fn mes_fora_de_1_a_12_e_rejeitado() {
        assert!(payload_com_mes(0).validate().is_err());
        assert!(payload_com_mes(13).validate().is_err());
    }

    #[test]
    fn meses_do_calendario_passam_na_validacao() {
        assert!(payload_com_mes(1).validate().is_ok());
        assert!(payload_com_mes(12).validate().is_ok());
    }

    #[test]
    fn meio_de_pagamento_vazio_e_rejeitado() {
        let mut payload = payload_com_mes(1);
        payload.payment_method = String::new();
        assert!(payload.validate().is_err());
    }
}
