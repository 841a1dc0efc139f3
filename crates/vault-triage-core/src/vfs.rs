use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

use crate::walker;

#[derive(Debug, Clone, Copy)]
pub struct FileMetadata {
    pub len: u64,
    pub mtime: SystemTime,
}

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read a file as text. Invalid UTF-8 is replaced, not rejected.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Relative, slash separated paths of every note under `root`.
    /// This should be a recursive search that skips dot entries.
    fn list_notes(&self, root: &Path) -> io::Result<Vec<String>>;

    fn count_notes(&self, root: &Path) -> io::Result<usize> {
        self.list_notes(root).map(|notes| notes.len())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Replace the file at `path` so readers never observe a partial write.
    fn write_atomic(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let meta = std::fs::metadata(path)?;
        Ok(FileMetadata {
            len: meta.len(),
            mtime: meta.modified()?,
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_notes(&self, root: &Path) -> io::Result<Vec<String>> {
        walker::list_notes(root)
    }

    fn count_notes(&self, root: &Path) -> io::Result<usize> {
        walker::count_notes(root)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        // Unique sibling temp file per writer
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents)?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lossy_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, b"# Caf\xe9").unwrap();

        let text = PhysicalFileSystem.read_to_string(&path).unwrap();
        assert_eq!(text, "# Caf\u{fffd}");
    }

    #[test]
    fn test_write_atomic_replaces_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "old").unwrap();

        PhysicalFileSystem.write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["cache.json"]);
    }

    #[test]
    fn test_concurrent_write_atomic_same_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("cache.json");
        let path = target.as_path();
        let payloads: Vec<Vec<u8>> = (0..4u8).map(|i| vec![b'a' + i; 1 << 20]).collect();

        for _ in 0..20 {
            std::thread::scope(|scope| {
                let handles: Vec<_> = payloads
                    .iter()
                    .map(|payload| scope.spawn(move || PhysicalFileSystem.write_atomic(path, payload)))
                    .collect();
                for handle in handles {
                    handle.join().unwrap().unwrap();
                }
            });

            let written = fs::read(path).unwrap();
            assert!(payloads.contains(&written), "torn cache write");
        }

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cache.json");
        assert!(PhysicalFileSystem.write_atomic(&path, b"x").is_err());
    }
}
