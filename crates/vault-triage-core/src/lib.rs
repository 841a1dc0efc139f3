//! Vault Triage Core Library
//!
//! Note discovery, frontmatter parsing, metadata extraction and the scan
//! cache. No HTTP concerns; everything here is synchronous.
//!

pub mod cache;
pub mod config;
pub mod connection;
mod error;
pub mod extract;
pub mod frontmatter;
pub mod model;
pub mod scanner;
pub mod utils;
pub mod vfs;
pub mod walker;

pub use cache::ScanCache;
pub use config::TriageConfig;
pub use connection::VaultConnection;
pub use error::{Result, TriageError};
pub use model::{NoteIssue, NoteMetadata, ScanResult, VaultConnectionInfo};
pub use scanner::VaultScanner;
pub use vfs::{FileSystem, PhysicalFileSystem};
