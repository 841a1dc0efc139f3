use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::error::TriageError;
use crate::model::VaultConnectionInfo;
use crate::utils::resolve_path;
use crate::utils::time::now_iso;
use crate::vfs::{FileSystem, PhysicalFileSystem};
use crate::Result;

/// Marker directory of an Obsidian vault
pub const OBSIDIAN_DIR: &str = ".obsidian";

/// Holds the single vault that triage operations target.
///
/// One instance is owned by whoever serves requests and passed around
/// explicitly. `connect` validates and replaces the slot; concurrent connects
/// are last write wins.
pub struct VaultConnection {
    fs: Arc<dyn FileSystem>,
    current: RwLock<Option<VaultConnectionInfo>>,
}

impl VaultConnection {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            current: RwLock::new(None),
        }
    }

    pub fn connect(&self, path: &Path) -> Result<VaultConnectionInfo> {
        let resolved = resolve_path(path)?;

        if !self.fs.is_dir(&resolved) {
            return Err(TriageError::DirectoryNotFound(resolved));
        }

        let has_obsidian_dir = self.fs.is_dir(&resolved.join(OBSIDIAN_DIR));
        let markdown_file_count = self.fs.count_notes(&resolved)?;

        if !has_obsidian_dir && markdown_file_count == 0 {
            return Err(TriageError::NotAVault);
        }

        let info = VaultConnectionInfo {
            path: resolved.to_string_lossy().into_owned(),
            has_obsidian_dir,
            markdown_file_count,
            connected_at: now_iso(),
        };

        log::info!(
            "Connected vault {} ({} notes, obsidian: {})",
            info.path,
            info.markdown_file_count,
            info.has_obsidian_dir
        );

        *self.write_slot() = Some(info.clone());
        Ok(info)
    }

    pub fn status(&self) -> Option<VaultConnectionInfo> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn disconnect(&self) {
        if let Some(previous) = self.write_slot().take() {
            log::info!("Disconnected vault {}", previous.path);
        }
    }

    fn write_slot(&self) -> std::sync::RwLockWriteGuard<'_, Option<VaultConnectionInfo>> {
        // The slot holds plain data, so a panicked writer cannot leave it half updated
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for VaultConnection {
    fn default() -> Self {
        Self::new(Arc::new(PhysicalFileSystem))
    }
}
