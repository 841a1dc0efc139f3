use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Directory does not appear to be a vault: no .obsidian directory and no .md files found")]
    NotAVault,
    #[error("No vault connected")]
    NoVaultConnected,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl TriageError {
    /// Errors caused by caller input. Their message is shown to the caller verbatim.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TriageError::DirectoryNotFound(_) | TriageError::NotAVault | TriageError::NoVaultConnected
        )
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = TriageError::DirectoryNotFound(PathBuf::from("/tmp/missing"));
        assert_eq!(err.to_string(), "Directory does not exist: /tmp/missing");
        assert!(err.is_validation());

        assert_eq!(
            TriageError::NotAVault.to_string(),
            "Directory does not appear to be a vault: no .obsidian directory and no .md files found"
        );
    }

    #[test]
    fn test_io_is_not_validation() {
        let err: TriageError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(!err.is_validation());
    }
}
