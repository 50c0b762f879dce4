//! Sistema de manejo de errores
//!
//! Este módulo define los errores de las dos consultas al backend de totos
//! y el error HTTP de la API JSON con su conversión a respuesta.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::utils::validation;

/// Fallo al cargar los datos de una zona.
///
/// El `Display` es el mensaje que ve el usuario.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneLoadError {
    /// Sin respuesta, estado HTTP no exitoso o cuerpo ilegible
    #[error("Failed to load route data")]
    Transport(String),

    /// El backend respondió con un campo `error`
    #[error("{0}")]
    Backend(String),

    /// Respuesta sin los campos esperados
    #[error("Route not found")]
    Missing,
}

/// Fallo en la búsqueda de un vehículo
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter a registration or serial number")]
    EmptyQuery,

    #[error("An error occurred while searching")]
    Transport(String),

    #[error("{0}")]
    Backend(String),

    #[error("No record found")]
    NoRecord,

    /// El color de ruta del vehículo no coincide con la zona activa
    #[error("This vehicle does not belong to this route")]
    ZoneMismatch { expected: String, found: String },
}

/// Errores de la API JSON
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: validation::first_message(&e),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("ZONE_MISMATCH".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::ExternalApi(msg) => {
                tracing::error!("External API error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "External API Error".to_string(),
                        message: "An error occurred while communicating with external service".to_string(),
                        details: Some(json!({ "external_api_error": msg })),
                        code: Some("EXTERNAL_API_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<ZoneLoadError> for AppError {
    fn from(err: ZoneLoadError) -> Self {
        match err {
            ZoneLoadError::Transport(detail) => AppError::ExternalApi(detail),
            other => AppError::NotFound(other.to_string()),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => AppError::BadRequest(err.to_string()),
            SearchError::Transport(detail) => AppError::ExternalApi(detail),
            SearchError::Backend(_) | SearchError::NoRecord => AppError::NotFound(err.to_string()),
            SearchError::ZoneMismatch { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ZoneLoadError::Transport("timeout".into()).to_string(), "Failed to load route data");
        assert_eq!(ZoneLoadError::Backend("Not found".into()).to_string(), "Not found");
        assert_eq!(SearchError::NoRecord.to_string(), "No record found");
        assert_eq!(
            SearchError::ZoneMismatch { expected: "red".into(), found: "blue".into() }.to_string(),
            "This vehicle does not belong to this route"
        );
    }

    #[test]
    fn test_search_error_status_codes() {
        let cases = [
            (SearchError::EmptyQuery, StatusCode::BAD_REQUEST),
            (SearchError::Transport("reset".into()), StatusCode::BAD_GATEWAY),
            (SearchError::NoRecord, StatusCode::NOT_FOUND),
            (SearchError::Backend("No vehicle".into()), StatusCode::NOT_FOUND),
            (
                SearchError::ZoneMismatch { expected: "red".into(), found: "pink".into() },
                StatusCode::CONFLICT,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_zone_errors_map_to_http() {
        let response = AppError::from(ZoneLoadError::Missing).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = AppError::from(ZoneLoadError::Transport("dns".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
