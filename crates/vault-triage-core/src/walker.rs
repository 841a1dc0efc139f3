//! Recursive note discovery shared by the scanner and the connection check.

use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::utils::to_slash_path;

/// Extension of note files, without the dot
pub const NOTE_EXTENSION: &str = "md";

/// A note file found under a walk root.
pub struct NoteEntry<'a> {
    /// Absolute location on disk
    pub path: &'a Path,
    /// Slash separated path relative to the walk root
    pub relative: String,
}

/// Depth first walk over every note under `root`.
///
/// Entries whose name starts with `.` are neither listed nor descended into;
/// the root itself is exempt. Symlinks are not followed. Directory entries are
/// visited sorted by file name. The first I/O error aborts the walk, as does
/// the first error returned by `visit`.
pub fn walk_notes<E, F>(root: &Path, mut visit: F) -> Result<(), E>
where
    E: From<io::Error>,
    F: FnMut(NoteEntry<'_>) -> Result<(), E>,
{
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if !is_note(&entry) {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map(to_slash_path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        visit(NoteEntry { path, relative })?;
    }

    Ok(())
}

/// Relative paths of every note under `root`, in walk order.
pub fn list_notes(root: &Path) -> io::Result<Vec<String>> {
    let mut notes = Vec::new();
    walk_notes(root, |entry| {
        notes.push(entry.relative);
        Ok::<_, io::Error>(())
    })?;
    Ok(notes)
}

pub fn count_notes(root: &Path) -> io::Result<usize> {
    let mut count = 0;
    walk_notes(root, |_| {
        count += 1;
        Ok::<_, io::Error>(())
    })?;
    Ok(count)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_note(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .map(|ext| ext == NOTE_EXTENSION)
            .unwrap_or(false)
}
