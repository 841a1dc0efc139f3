use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::ScanCache;
use crate::extract::{extract_tags, extract_title};
use crate::frontmatter::parse_frontmatter;
use crate::model::{NoteMetadata, ScanResult, HEALTH_SCORE_PLACEHOLDER};
use crate::utils::resolve_path;
use crate::utils::time::{now_iso, system_time_iso};
use crate::vfs::{FileSystem, PhysicalFileSystem};
use crate::Result;


#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub total_files: usize,
    pub total_bytes: u64,
    pub elapsed: Duration,
}

/// Walks a vault, extracts per-note metadata and persists the result to the
/// vault's scan cache.
///
/// Any I/O error aborts the whole scan; there are no partial results.
pub struct VaultScanner {
    fs: Arc<dyn FileSystem>,
    cache: ScanCache,
}

impl VaultScanner {
    pub fn new(fs: Arc<dyn FileSystem>, cache: ScanCache) -> Self {
        Self { fs, cache }
    }

    pub fn scan(&self, vault_path: &Path) -> Result<ScanResult> {
        self.scan_with_stats(vault_path).map(|(result, _)| result)
    }

    pub fn scan_with_stats(&self, vault_path: &Path) -> Result<(ScanResult, ScanStats)> {
        let started = Instant::now();
        let root = resolve_path(vault_path)?;

        let files = self.fs.list_notes(&root)?;
        let mut stats = ScanStats {
            total_files: files.len(),
            ..Default::default()
        };

        let mut notes = Vec::with_capacity(files.len());
        for relative in files {
            let note = self.index_file(&root, relative)?;
            stats.total_bytes += note.size;
            notes.push(note);
        }

        let result = ScanResult {
            vault_path: root.to_string_lossy().into_owned(),
            scanned_at: now_iso(),
            notes,
            health_score: HEALTH_SCORE_PLACEHOLDER,
        };

        let cache_path = self.cache.save(&root, &result, &*self.fs)?;
        stats.elapsed = started.elapsed();

        log::info!(
            "Scanned {} notes ({} bytes) in {:?} at {:?}",
            stats.total_files,
            stats.total_bytes,
            stats.elapsed,
            root
        );
        log::debug!("Scan cache written to {:?}", cache_path);

        Ok((result, stats))
    }

    /// The last persisted scan of a vault, if any.
    pub fn cached(&self, vault_path: &Path) -> Result<Option<ScanResult>> {
        let root = resolve_path(vault_path)?;
        self.cache.load(&root, &*self.fs)
    }

    /// Builds the metadata of one note. `relative` is slash separated.
    pub fn index_file(&self, root: &Path, relative: String) -> Result<NoteMetadata> {
        let path = root.join(&relative);
        let meta = self.fs.metadata(&path)?;
        let content = self.fs.read_to_string(&path)?;
        let frontmatter = parse_frontmatter(&content);

        log::debug!("Indexed {} ({} bytes)", relative, meta.len);

        Ok(NoteMetadata {
            title: extract_title(&content, &frontmatter, &relative),
            tags: extract_tags(&frontmatter),
            size: meta.len,
            modified_at: system_time_iso(meta.mtime),
            issues: Vec::new(),
            path: relative,
        })
    }
}

impl Default for VaultScanner {
    fn default() -> Self {
        Self::new(Arc::new(PhysicalFileSystem), ScanCache::default())
    }
}
