// src/handlers/properties.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        coerce::{lenient_decimal, lenient_decimal_opt},
        error::AppError,
    },
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::property::{Property, PropertyUnit, RentPeriod},
    services::property_service::{PropertyPatch, UnitInput},
};

// ---
// Payloads
// ---

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitPayload {
    #[validate(length(min = 1, message = "O tipo da unidade é obrigatório."))]
    #[schema(example = "chambre")]
    pub unit_type: String,

    #[validate(length(min = 1, message = "O número da unidade é obrigatório."))]
    #[schema(example = "A-02")]
    pub unit_number: String,

    // Aceita número ou string numérica (colunas decimais serializadas)
    #[serde(deserialize_with = "lenient_decimal")]
    #[schema(value_type = f64, example = "75000")]
    pub monthly_rent: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    #[schema(value_type = Option<f64>)]
    pub area_sqm: Option<Decimal>,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub is_available: Option<bool>,
    pub rent_period: Option<RentPeriod>,
}

impl From<CreateUnitPayload> for UnitInput {
    fn from(p: CreateUnitPayload) -> Self {
        UnitInput {
            unit_type: p.unit_type,
            unit_number: p.unit_number,
            monthly_rent: p.monthly_rent,
            area_sqm: p.area_sqm,
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            is_available: p.is_available,
            rent_period: p.rent_period,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyPayload {
    #[validate(length(min = 1, message = "O tipo do imóvel é obrigatório."))]
    #[schema(example = "immeuble")]
    pub property_type: String,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Résidence Teranga")]
    pub name: String,

    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    #[schema(example = "Ouakam, Dakar")]
    pub address: String,

    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: Option<String>,

    #[schema(value_type = Option<Vec<String>>)]
    pub photos: Option<Value>,
    #[schema(value_type = Option<Vec<String>>)]
    pub equipments: Option<Value>,

    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    #[schema(value_type = Option<f64>)]
    pub rent_amount: Option<Decimal>,

    #[serde(default)]
    #[validate(nested)]
    pub units: Vec<CreateUnitPayload>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyPayload {
    pub property_type: Option<String>,
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres."))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub photos: Option<Value>,
    #[schema(value_type = Option<Vec<String>>)]
    pub equipments: Option<Value>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    #[schema(value_type = Option<f64>)]
    pub rent_amount: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddUnitsPayload {
    #[validate(length(min = 1, message = "Informe ao menos uma unidade."), nested)]
    pub units: Vec<CreateUnitPayload>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishPayload {
    pub is_published: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCreated {
    pub property: Property,
    pub units: Vec<PropertyUnit>,
}

// ---
// Handlers
// ---

// GET /api/properties (público)
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    responses(
        (status = 200, description = "Vitrine pública de imóveis publicados", body = Vec<crate::models::listing::PropertyListing>)
    )
)]
pub async fn list_properties(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let listings = app_state.property_service.public_listings().await?;
    Ok((StatusCode::OK, Json(listings)))
}

// GET /api/properties/{id} (público)
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Detalhe do anúncio", body = crate::models::listing::PropertyListing),
        (status = 404, description = "Imóvel não encontrado ou não publicado")
    )
)]
pub async fn get_property(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let listing = app_state.property_service.public_listing(id).await?;
    Ok((StatusCode::OK, Json(listing)))
}

// GET /api/properties/mine
#[utoipa::path(
    get,
    path = "/api/properties/mine",
    tag = "Properties",
    responses(
        (status = 200, description = "Imóveis do dono autenticado", body = Vec<crate::models::listing::PropertyListing>)
    ),
    security(("api_jwt" = []))
)]
pub async fn my_properties(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let listings = app_state.property_service.owner_listings(user.0.id).await?;
    Ok((StatusCode::OK, Json(listings)))
}

// POST /api/properties
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    request_body = CreatePropertyPayload,
    responses(
        (status = 201, description = "Imóvel criado", body = PropertyCreated),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_property(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreatePropertyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let units = payload.units.into_iter().map(UnitInput::from).collect();

    let (property, units) = app_state
        .property_service
        .create(
            user.0.id,
            &payload.property_type,
            &payload.name,
            &payload.address,
            payload.lat,
            payload.lng,
            payload.description.as_deref(),
            payload.photos.as_ref(),
            payload.equipments.as_ref(),
            payload.rent_amount,
            units,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PropertyCreated { property, units })))
}

// PATCH /api/properties/{id}
#[utoipa::path(
    patch,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    request_body = UpdatePropertyPayload,
    responses(
        (status = 200, description = "Imóvel atualizado", body = Property),
        (status = 404, description = "Imóvel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_property(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePropertyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let patch = PropertyPatch {
        property_type: payload.property_type,
        name: payload.name,
        address: payload.address,
        lat: payload.lat,
        lng: payload.lng,
        description: payload.description,
        photos: payload.photos,
        equipments: payload.equipments,
        rent_amount: payload.rent_amount,
    };

    let property = app_state
        .property_service
        .update(id, user.0.id, patch)
        .await?;

    Ok((StatusCode::OK, Json(property)))
}

// DELETE /api/properties/{id}
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    responses(
        (status = 204, description = "Imóvel removido (unidades em cascata)"),
        (status = 404, description = "Imóvel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_property(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.property_service.delete(id, user.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/properties/{id}/units
#[utoipa::path(
    post,
    path = "/api/properties/{id}/units",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    request_body = AddUnitsPayload,
    responses(
        (status = 201, description = "Unidades adicionadas", body = Vec<PropertyUnit>),
        (status = 404, description = "Imóvel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_units(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddUnitsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let units = payload.units.into_iter().map(UnitInput::from).collect();
    let created = app_state
        .property_service
        .add_units(id, user.0.id, units)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// PATCH /api/properties/{id}/publish
#[utoipa::path(
    patch,
    path = "/api/properties/{id}/publish",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    request_body = PublishPayload,
    responses(
        (status = 200, description = "Publicação atualizada", body = Property),
        (status = 404, description = "Imóvel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_publication(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<PublishPayload>,
) -> Result<impl IntoResponse, AppError> {
    let property = app_state
        .property_service
        .set_publication(id, user.0.id, payload.is_published)
        .await?;

    Ok((StatusCode::OK, Json(property)))
}
