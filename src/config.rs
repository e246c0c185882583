//! Runtime configuration for the dashboard server

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::store::{StoreError, StoreResult};

/// Database selected when none is configured
pub const DEFAULT_DATABASE_NAME: &str = "Cluster0";

/// Address the server binds when none is configured
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Directory holding the frontend files
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// MongoDB connection string (location and credentials)
    pub database_url: Option<String>,
    pub database_name: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// The connection string, if one was supplied and is not blank
    pub fn database_url(&self) -> StoreResult<&str> {
        match self.database_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(StoreError::configuration("DATABASE_URL is not set")),
        }
    }
}

/// Load `.env` from the working directory or one of its parents.
///
/// Variables already present in the environment are kept.
pub fn load_dotenv() -> Result<PathBuf, dotenvy::Error> {
    dotenvy::dotenv()
}

/// Load a specific env file, with the same precedence as [`load_dotenv`]
pub fn load_env_file(path: &Path) -> Result<PathBuf, dotenvy::Error> {
    dotenvy::from_path(path)?;
    Ok(path.to_path_buf())
}
