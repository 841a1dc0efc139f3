use std::sync::Arc;

use vault_triage_core::{FileSystem, PhysicalFileSystem, ScanCache, TriageConfig, VaultConnection, VaultScanner};

/// Shared state for the HTTP server
/// Must be Send + Sync
#[derive(Clone)]
pub struct AppState {
    /// The single connected vault, if any
    pub connection: Arc<VaultConnection>,
    pub scanner: Arc<VaultScanner>,
}

impl AppState {
    pub fn new(config: &TriageConfig) -> Self {
        Self::with_fs(Arc::new(PhysicalFileSystem), config)
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>, config: &TriageConfig) -> Self {
        Self {
            connection: Arc::new(VaultConnection::new(fs.clone())),
            scanner: Arc::new(VaultScanner::new(fs, ScanCache::new(&config.scan))),
        }
    }
}
