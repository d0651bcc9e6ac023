use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::middleware::i18n::Locale;

// Erros internos da aplicação. Os handlers convertem para ApiError com o idioma do cliente.
#[derive(Debug, Error)]
pub enum AppError {
    // Falha de transporte ou de decodificação ao falar com a API do restaurante
    #[error("Erro ao consultar a API do restaurante: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("A API do restaurante respondeu {status} em {endpoint}")]
    UpstreamStatus { endpoint: String, status: u16 },

    #[error("Data de referência inválida: {0}")]
    InvalidReferenceDate(String),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// Erro já pronto para o cliente (status + mensagem traduzida)
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) | AppError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            AppError::InvalidReferenceDate(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self, lang: &str) -> String {
        match (self, lang) {
            (AppError::Upstream(_) | AppError::UpstreamStatus { .. }, "pt") => {
                "A API do restaurante está indisponível.".to_string()
            }
            (AppError::Upstream(_) | AppError::UpstreamStatus { .. }, "fr") => {
                "L'API du restaurant est indisponible.".to_string()
            }
            (AppError::Upstream(_) | AppError::UpstreamStatus { .. }, _) => {
                "The restaurant API is unavailable.".to_string()
            }
            (AppError::InvalidReferenceDate(raw), "pt") => {
                format!("Data de referência inválida: '{}'. Use AAAA-MM-DD.", raw)
            }
            (AppError::InvalidReferenceDate(raw), "fr") => {
                format!("Date de référence invalide : '{}'. Utilisez AAAA-MM-JJ.", raw)
            }
            (AppError::InvalidReferenceDate(raw), _) => {
                format!("Invalid reference date: '{}'. Use YYYY-MM-DD.", raw)
            }
            (AppError::InternalServerError(_), "pt") => "Ocorreu um erro inesperado.".to_string(),
            (AppError::InternalServerError(_), "fr") => "Une erreur inattendue est survenue.".to_string(),
            (AppError::InternalServerError(_), _) => "An unexpected error occurred.".to_string(),
        }
    }

    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let status = self.status_code();
        if status.is_server_error() {
            // O detalhe fica no log, o cliente só recebe a mensagem traduzida
            tracing::error!("Erro ao montar resposta: {}", self);
        }

        let details = match self {
            AppError::UpstreamStatus { endpoint, status } => {
                Some(json!({ "endpoint": endpoint, "upstreamStatus": status }))
            }
            _ => None,
        };

        ApiError {
            status,
            error: self.message(&locale.0),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default()).into_response()
    }
}
