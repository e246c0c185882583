//! HTTP surface of the dashboard
//!
//! Handlers receive an [`AppContext`] holding the store handle opened at
//! startup. The handle is read-only while serving and closed once the server
//! has drained.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::store::DocumentStore;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppContext {
    store: Option<Arc<dyn DocumentStore>>,
    static_dir: PathBuf,
}

impl AppContext {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            static_dir: static_dir.into(),
        }
    }

    /// The store, or `None` when the startup connection failed
    pub fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    pub fn static_dir(&self) -> &PathBuf {
        &self.static_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    /// Release the store connection
    pub async fn close(&self) {
        if let Some(store) = &self.store {
            store.shutdown().await;
        }
    }
}

/// Build the API router
pub fn router(context: AppContext) -> Router {
    let static_files = ServeDir::new(context.static_dir());

    Router::new()
        .route("/", get(handlers::serve_index))
        .route("/api/startups", get(handlers::list_startups))
        .route("/api/mentors", get(handlers::list_mentors))
        .route(
            "/api/sessions/detailed",
            get(handlers::list_sessions_detailed),
        )
        .route(
            "/api/sessions/download_excel",
            get(handlers::download_sessions_excel),
        )
        .nest_service("/static", static_files)
        .layer(CorsLayer::permissive())
        .with_state(context)
}

/// Serve until Ctrl-C or SIGTERM, then close the store
pub async fn serve(context: AppContext, addr: SocketAddr) -> Result<()> {
    let app = router(context.clone());

    info!("Starting dashboard API server on {}", addr);
    if !context.is_connected() {
        info!("No database connection; data endpoints will answer 503");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    context.close().await;
    info!("Dashboard API server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
