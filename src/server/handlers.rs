//! Route handlers for the dashboard API

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json, Response},
};
use chrono::Local;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::error::ApiError;
use super::AppContext;
use crate::records::{document_to_json, read_collection};
use crate::sessions::{
    aggregate_sessions, export_filename, ExportTable, SessionDetail, XLSX_CONTENT_TYPE,
};
use crate::store::{MENTORS, STARTUPS};

/// Frontend entry document
pub async fn serve_index(State(context): State<AppContext>) -> Result<Response, ApiError> {
    let path = context.index_path();
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok((
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response()),
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            Err(ApiError::NotFound(
                "index.html not found in static directory.".to_string(),
            ))
        }
    }
}

pub async fn list_startups(
    State(context): State<AppContext>,
) -> Result<Json<Vec<Value>>, ApiError> {
    list_collection(&context, STARTUPS, "startups").await
}

pub async fn list_mentors(
    State(context): State<AppContext>,
) -> Result<Json<Vec<Value>>, ApiError> {
    list_collection(&context, MENTORS, "mentores").await
}

async fn list_collection(
    context: &AppContext,
    collection: &str,
    what: &str,
) -> Result<Json<Vec<Value>>, ApiError> {
    let documents = read_collection(context.store(), collection)
        .await
        .map_err(|e| {
            error!("Failed to read collection '{}': {}", collection, e);
            ApiError::from_store(e, what)
        })?;

    debug!("Serving {} documents from '{}'", documents.len(), collection);
    Ok(Json(documents.into_iter().map(document_to_json).collect()))
}

async fn joined_sessions(context: &AppContext) -> Result<Vec<SessionDetail>, ApiError> {
    aggregate_sessions(context.store()).await.map_err(|e| {
        error!("Session aggregation failed: {}", e);
        ApiError::from(e)
    })
}

pub async fn list_sessions_detailed(
    State(context): State<AppContext>,
) -> Result<Json<Vec<SessionDetail>>, ApiError> {
    let sessions = joined_sessions(&context).await?;
    debug!("Serving {} joined sessions", sessions.len());
    Ok(Json(sessions))
}

pub async fn download_sessions_excel(
    State(context): State<AppContext>,
) -> Result<Response, ApiError> {
    let sessions = joined_sessions(&context).await?;

    let bytes = ExportTable::from_sessions(&sessions)
        .and_then(|table| table.to_xlsx())
        .map_err(|e| {
            warn!("Session export failed: {}", e);
            ApiError::from(e)
        })?;

    let filename = export_filename(Local::now().naive_local());
    info!(
        "Exporting {} sessions as {} ({} bytes)",
        sessions.len(),
        filename,
        bytes.len()
    );

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={filename}"),
        ),
        (
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            "Content-Disposition".to_string(),
        ),
    ];

    Ok((headers, bytes).into_response())
}
