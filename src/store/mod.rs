//! Document store access for the dashboard
//!
//! The dashboard only ever reads. A store handle is opened once at startup;
//! when that fails the process keeps running without one and data requests
//! are answered as unavailable.

pub mod error;
pub mod memory;
pub mod mongo;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use traits::DocumentStore;

use std::sync::Arc;
use tracing::{error, warn};

use crate::config::ServerConfig;

/// Collection holding startup records
pub const STARTUPS: &str = "startup";

/// Collection holding mentor records
pub const MENTORS: &str = "mentorship";

/// Collection holding mentoring sessions
pub const SESSIONS: &str = "sessions";

/// Open the store described by `config`.
///
/// Returns `None` when no connection string is configured or the server does
/// not answer; the cause is logged.
pub async fn connect_store(config: &ServerConfig) -> Option<Arc<dyn DocumentStore>> {
    let url = match config.database_url() {
        Ok(url) => url,
        Err(e) => {
            warn!("{}; data endpoints will answer 503", e);
            return None;
        }
    };

    match MongoStore::connect(url, &config.database_name).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            error!("Could not connect to MongoDB: {}", e);
            None
        }
    }
}
