//src/main.rs

use std::time::Duration;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger; o filtro vem de RUST_LOG quando definido
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Faxina periódica: conversas além da janela de retenção caem uma vez por dia
    let purge_service = app_state.message_service.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(24 * 60 * 60));
        loop {
            interval.tick().await;
            match purge_service.purge_expired().await {
                Ok(0) => {}
                Ok(n) => tracing::info!("🧹 {} mensagens expiradas removidas", n),
                Err(e) => tracing::error!("Falha na faxina de mensagens: {}", e),
            }
        }
    });

    // Rotas públicas: a vitrine não exige token
    let public_routes = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/properties", get(handlers::properties::list_properties))
        .route(
            "/api/properties/{id}",
            get(handlers::properties::get_property),
        );

    let tenant_routes = Router::new()
        .route(
            "/",
            post(handlers::tenants::create_tenant).get(handlers::tenants::list_tenants),
        )
        .route(
            "/{id}",
            patch(handlers::tenants::update_tenant).delete(handlers::tenants::delete_tenant),
        );

    let receipt_routes = Router::new()
        .route("/", post(handlers::receipts::create_receipt))
        .route(
            "/{id}",
            get(handlers::receipts::get_receipt).delete(handlers::receipts::delete_receipt),
        )
        .route(
            "/tenant/{tenant_id}",
            get(handlers::receipts::list_tenant_receipts),
        )
        .route(
            "/owner/{owner_id}",
            get(handlers::receipts::list_owner_receipts),
        );

    let message_routes = Router::new()
        .route("/", post(handlers::messages::send_message))
        .route("/unread", get(handlers::messages::unread_count))
        .route("/read", patch(handlers::messages::mark_conversation_read))
        .route(
            "/conversation/{user_id}",
            get(handlers::messages::get_conversation),
        )
        .route("/{id}", delete(handlers::messages::delete_message));

    let report_routes = Router::new()
        .route(
            "/",
            post(handlers::reports::create_report).get(handlers::reports::list_reports),
        )
        .route("/statistics", get(handlers::reports::report_statistics))
        .route("/{id}", patch(handlers::reports::moderate_report));

    let admin_routes = Router::new()
        .route("/users", get(handlers::admin::list_users))
        .route("/users/{id}/block", patch(handlers::admin::set_user_blocked));

    // Rotas protegidas: tudo aqui passa pelo auth_guard
    let protected_routes = Router::new()
        .route("/api/properties", post(handlers::properties::create_property))
        .route(
            "/api/properties/mine",
            get(handlers::properties::my_properties),
        )
        .route(
            "/api/properties/{id}",
            patch(handlers::properties::update_property)
                .delete(handlers::properties::delete_property),
        )
        .route(
            "/api/properties/{id}/units",
            post(handlers::properties::add_units),
        )
        .route(
            "/api/properties/{id}/publish",
            patch(handlers::properties::update_publication),
        )
        .nest("/api/tenants", tenant_routes)
        .nest("/api/receipts", receipt_routes)
        .nest("/api/messages", message_routes)
        .nest("/api/reports", report_routes)
        .nest("/api/admin", admin_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state);

    // Inicia o servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
