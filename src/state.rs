//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::HospitalService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::SqliteHospitalRepository;

/// Explicitly constructed per server (or per test), never global.
#[derive(Clone)]
pub struct AppState {
    pub hospital_service: Arc<HospitalService<SqliteHospitalRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub docs_path: Arc<PathBuf>,
}

impl AppState {
    /// Wires the repository and service on top of `pool`.
    pub fn new(pool: Arc<SqlitePool>, cache: Arc<dyn CacheService>, docs_path: PathBuf) -> Self {
        let repository = Arc::new(SqliteHospitalRepository::new(pool));

        Self {
            hospital_service: Arc::new(HospitalService::new(repository)),
            cache,
            docs_path: Arc::new(docs_path),
        }
    }
}
