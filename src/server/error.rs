//! Translation of failures into HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use crate::sessions::{AggregationError, ExportError};
use crate::store::StoreError;

/// Error answered to the client as `{"detail": "<message>"}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Base de datos no disponible.")]
    StoreUnavailable,

    #[error("{0}")]
    Internal(String),

    #[error(
        "Error al ejecutar la agregación de sesiones: {0}. \
         Revisa el formato de los IDs y los campos 'signed' en tu DB."
    )]
    Aggregation(String),

    #[error("No hay datos de sesiones para descargar.")]
    NoSessions,

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) | Self::Aggregation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NoSessions | Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Map a collection read failure for the listing named `what`
    pub fn from_store(err: StoreError, what: &str) -> Self {
        if err.is_unavailable() {
            Self::StoreUnavailable
        } else {
            Self::Internal(format!("Error interno al obtener {what}: {err}"))
        }
    }
}

impl From<AggregationError> for ApiError {
    fn from(err: AggregationError) -> Self {
        if err.is_unavailable() {
            Self::StoreUnavailable
        } else {
            Self::Aggregation(err.to_string())
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Empty => Self::NoSessions,
            other => Self::Internal(format!("Error al generar el archivo Excel: {other}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Aggregation("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::NoSessions.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::NotFound("index.html".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unavailable_aggregation_maps_to_503() {
        let err = AggregationError::Store(StoreError::unavailable("down"));
        assert!(matches!(ApiError::from(err), ApiError::StoreUnavailable));
    }

    #[test]
    fn test_aggregation_message_keeps_cause() {
        let err = AggregationError::coercion("s9", "duration", "expected a whole number");
        let api = ApiError::from(err);
        assert!(api.to_string().contains("s9"));
        assert!(api.to_string().contains("duration"));
    }

    #[test]
    fn test_empty_export_maps_to_no_sessions() {
        assert!(matches!(
            ApiError::from(ExportError::Empty),
            ApiError::NoSessions
        ));
    }

    #[test]
    fn test_store_query_error_is_internal() {
        let api = ApiError::from_store(StoreError::query("cursor lost"), "startups");
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api.to_string(),
            "Error interno al obtener startups: Query error: cursor lost"
        );
    }
}
