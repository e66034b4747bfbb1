// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Properties ---
        handlers::properties::list_properties,
        handlers::properties::get_property,
        handlers::properties::my_properties,
        handlers::properties::create_property,
        handlers::properties::update_property,
        handlers::properties::delete_property,
        handlers::properties::add_units,
        handlers::properties::update_publication,

        // --- Tenants ---
        handlers::tenants::create_tenant,
        handlers::tenants::list_tenants,
        handlers::tenants::update_tenant,
        handlers::tenants::delete_tenant,

        // --- Receipts ---
        handlers::receipts::create_receipt,
        handlers::receipts::get_receipt,
        handlers::receipts::list_tenant_receipts,
        handlers::receipts::list_owner_receipts,
        handlers::receipts::delete_receipt,

        // --- Messages ---
        handlers::messages::send_message,
        handlers::messages::get_conversation,
        handlers::messages::unread_count,
        handlers::messages::mark_conversation_read,
        handlers::messages::delete_message,

        // --- Reports ---
        handlers::reports::create_report,
        handlers::reports::list_reports,
        handlers::reports::moderate_report,
        handlers::reports::report_statistics,

        // --- Admin ---
        handlers::admin::list_users,
        handlers::admin::set_user_blocked,
    ),
    components(
        schemas(

            // --- Users ---
            models::user::UserRole,
            models::user::User,

            // --- Properties ---
            models::property::RentPeriod,
            models::property::Property,
            models::property::PropertyUnit,

            // --- Listings ---
            models::listing::DisplayStatus,
            models::listing::OwnerSummary,
            models::listing::PropertyListing,

            // --- Tenants ---
            models::tenant::TenantStatus,
            models::tenant::Tenant,

            // --- Receipts ---
            models::receipt::Receipt,
            models::receipt::ReceiptDetail,

            // --- Messages ---
            models::message::Message,
            models::message::UnreadCount,

            // --- Reports ---
            models::report::ReportStatus,
            models::report::Report,
            models::report::ReportedUserEntry,
            models::report::StatusCount,
            models::report::ReportStatistics,

            // --- Payloads ---
            handlers::properties::CreateUnitPayload,
            handlers::properties::CreatePropertyPayload,
            handlers::properties::UpdatePropertyPayload,
            handlers::properties::AddUnitsPayload,
            handlers::properties::PublishPayload,
            handlers::properties::PropertyCreated,
            handlers::tenants::CreateTenantPayload,
            handlers::tenants::UpdateTenantPayload,
            handlers::receipts::CreateReceiptPayload,
            handlers::messages::SendMessagePayload,
            handlers::messages::MarkReadPayload,
            handlers::messages::MarkReadResponse,
            handlers::reports::CreateReportPayload,
            handlers::reports::ModerateReportPayload,
            handlers::admin::BlockUserPayload,
        )
    ),
    tags(
        (name = "Properties", description = "Vitrine pública e gestão de imóveis e unidades"),
        (name = "Tenants", description = "Locatários e contratos de aluguel"),
        (name = "Receipts", description = "Emissão e consulta de recibos de aluguel"),
        (name = "Messages", description = "Conversas entre usuários da plataforma"),
        (name = "Reports", description = "Denúncias e moderação"),
        (name = "Admin", description = "Administração de usuários")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
