// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
//
// Nota sobre NotFound vs Forbidden: as mutações com dono verificam a posse
// direto no predicado SQL, então "não existe" e "não é seu" produzem o
// mesmo NotFound. Comportamento intencional: a API não revela a existência
// de recursos de terceiros.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Token inválido")]
    InvalidToken,

    #[error("Conta bloqueada")]
    UserBlocked,

    #[error("Acesso negado")]
    Forbidden,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Imóvel não encontrado")]
    PropertyNotFound,

    #[error("Unidade não encontrada")]
    UnitNotFound,

    #[error("Locatário não encontrado")]
    TenantNotFound,

    #[error("Recibo não encontrado")]
    ReceiptNotFound,

    #[error("Mensagem não encontrada")]
    MessageNotFound,

    #[error("Denúncia não encontrada")]
    ReportNotFound,

    #[error("Valor inválido: {0}")]
    InvalidAmount(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::InvalidToken | AppError::JwtError(_) => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::UserBlocked => (
                StatusCode::FORBIDDEN,
                "Esta conta está bloqueada.".to_string(),
            ),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Acesso negado.".to_string()),

            AppError::UserNotFound => {
                (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string())
            }
            AppError::PropertyNotFound => {
                (StatusCode::NOT_FOUND, "Imóvel não encontrado.".to_string())
            }
            AppError::UnitNotFound => {
                (StatusCode::NOT_FOUND, "Unidade não encontrada.".to_string())
            }
            AppError::TenantNotFound => (
                StatusCode::NOT_FOUND,
                "Locatário não encontrado.".to_string(),
            ),
            AppError::ReceiptNotFound => {
                (StatusCode::NOT_FOUND, "Recibo não encontrado.".to_string())
            }
            AppError::MessageNotFound => {
                (StatusCode::NOT_FOUND, "Mensagem não encontrada.".to_string())
            }
            AppError::ReportNotFound => {
                (StatusCode::NOT_FOUND, "Denúncia não encontrada.".to_string())
            }

            AppError::InvalidAmount(msg) => (StatusCode::BAD_REQUEST, msg),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro interno do servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posse_invalida_e_inexistente_sao_indistinguiveis() {
        let missing = AppError::PropertyNotFound.into_response();
        let not_yours = AppError::PropertyNotFound.into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.status(), not_yours.status());
    }

    #[test]
    fn erro_de_banco_vira_500() {
        let resp = AppError::DatabaseError(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn token_invalido_vira_401() {
        let resp = AppError::InvalidToken.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
