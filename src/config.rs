// src/config.rs

use std::{env, time::Duration};

use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{
    db::{
        MessageRepository, PropertyRepository, ReceiptRepository, ReportRepository,
        TenantRepository, UserRepository,
    },
    services::{
        auth::AuthService, message_service::MessageService, property_service::PropertyService,
        receipt_service::ReceiptService, report_service::ReportService,
        tenant_service::TenantService, user_service::UserService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub property_service: PropertyService,
    pub tenant_service: TenantService,
    pub receipt_service: ReceiptService,
    pub message_service: MessageService,
    pub report_service: ReportService,
    pub user_service: UserService,
}

impl AppState {
    // Carrega as configurações do ambiente e monta o grafo de dependências
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // O banco é configurado por variáveis discretas, não por URL
        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port: u16 = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()?;
        let db_user = env::var("DB_USER")?;
        let db_pass = env::var("DB_PASS")?;
        let db_name = env::var("DB_NAME")?;

        let jwt_secret = env::var("JWT_SECRET")?;

        // Origem pública usada para absolutizar as URLs de foto
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let options = PgConnectOptions::new()
            .host(&db_host)
            .port(db_port)
            .username(&db_user)
            .password(&db_pass)
            .database(&db_name);

        let db_pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o grafo de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let property_repo = PropertyRepository::new(db_pool.clone());
        let tenant_repo = TenantRepository::new(db_pool.clone());
        let receipt_repo = ReceiptRepository::new(db_pool.clone());
        let message_repo = MessageRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let property_service = PropertyService::new(
            property_repo.clone(),
            db_pool.clone(),
            public_base_url,
        );
        let tenant_service =
            TenantService::new(tenant_repo, property_repo.clone(), db_pool.clone());
        let receipt_service =
            ReceiptService::new(receipt_repo, property_repo, db_pool.clone());
        let message_service =
            MessageService::new(message_repo, user_repo.clone(), db_pool.clone());
        let report_service = ReportService::new(report_repo, user_repo.clone(), db_pool.clone());
        let user_service = UserService::new(user_repo, db_pool.clone());

        Ok(Self {
            db_pool,
            auth_service,
            property_service,
            tenant_service,
            receipt_service,
            message_service,
            report_service,
            user_service,
        })
    }
}
