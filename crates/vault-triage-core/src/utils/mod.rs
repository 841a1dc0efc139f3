pub mod time;

use std::io;
use std::path::{Component, Path, PathBuf};

/// Render a relative path with forward slashes, whatever the platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vault_triage_core::utils::to_slash_path;
///
/// assert_eq!(to_slash_path(Path::new("foo/bar.md")), "foo/bar.md");
/// assert_eq!(to_slash_path(Path::new("note.md")), "note.md");
/// # if cfg!(windows) {
/// #     assert_eq!(to_slash_path(Path::new("foo\\bar.md")), "foo/bar.md");
/// # }
/// ```
pub fn to_slash_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

/// Make a path absolute against the current directory and fold `.` and `..`
/// segments lexically. Symlinks are left alone and the path need not exist.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root, so `/..` stays `/`
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
