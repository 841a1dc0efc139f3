use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::model::ScanResult;
use crate::vfs::FileSystem;
use crate::Result;

/// The scan cache kept inside each vault.
///
/// The file holds the pretty-printed JSON of the last [`ScanResult`] and is
/// overwritten wholesale on every scan. There is no version field.
#[derive(Debug, Clone)]
pub struct ScanCache {
    dir: String,
    file: String,
}

impl ScanCache {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            dir: config.cache_dir.clone(),
            file: config.cache_file.clone(),
        }
    }

    pub fn dir_path(&self, vault_root: &Path) -> PathBuf {
        vault_root.join(&self.dir)
    }

    pub fn file_path(&self, vault_root: &Path) -> PathBuf {
        self.dir_path(vault_root).join(&self.file)
    }

    pub fn save(&self, vault_root: &Path, result: &ScanResult, fs: &dyn FileSystem) -> Result<PathBuf> {
        fs.create_dir_all(&self.dir_path(vault_root))?;

        let path = self.file_path(vault_root);
        let buffer = serde_json::to_vec_pretty(result)?;
        fs.write_atomic(&path, &buffer)?;
        Ok(path)
    }

    /// Read the last scan back. `Ok(None)` when the vault was never scanned.
    pub fn load(&self, vault_root: &Path, fs: &dyn FileSystem) -> Result<Option<ScanResult>> {
        let path = self.file_path(vault_root);
        let buffer = match fs.read_to_string(&path) {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&buffer)?))
    }
}

impl Default for ScanCache {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HEALTH_SCORE_PLACEHOLDER;
    use crate::vfs::PhysicalFileSystem;
    use tempfile::TempDir;

    fn empty_result(root: &Path) -> ScanResult {
        ScanResult {
            vault_path: root.to_string_lossy().into_owned(),
            scanned_at: "2024-01-01T00:00:00.000Z".to_string(),
            notes: vec![],
            health_score: HEALTH_SCORE_PLACEHOLDER,
        }
    }

    #[test]
    fn test_save_creates_dir_and_load_reads_back() {
        let dir = TempDir::new().unwrap();
        let cache = ScanCache::default();
        let result = empty_result(dir.path());

        let path = cache.save(dir.path(), &result, &PhysicalFileSystem).unwrap();
        assert_eq!(path, dir.path().join(".vault-triage").join("scan-cache.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"vaultPath\""), "cache should be pretty-printed");

        let loaded = cache.load(dir.path(), &PhysicalFileSystem).unwrap();
        assert_eq!(loaded, Some(result));
    }

    #[test]
    fn test_load_without_cache() {
        let dir = TempDir::new().unwrap();
        let loaded = ScanCache::default().load(dir.path(), &PhysicalFileSystem).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupt_cache() {
        let dir = TempDir::new().unwrap();
        let cache = ScanCache::default();
        std::fs::create_dir_all(cache.dir_path(dir.path())).unwrap();
        std::fs::write(cache.file_path(dir.path()), "{not json").unwrap();

        assert!(cache.load(dir.path(), &PhysicalFileSystem).is_err());
    }
}
