use serde::{Deserialize, Serialize};

/// Placeholder until a scoring pass exists.
pub const HEALTH_SCORE_PLACEHOLDER: u32 = 100;

/// Triage findings attached to a note. Never populated by the scanner itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteIssue {
    Orphan,
    BrokenLinks,
    Empty,
    Inbox,
    NoTags,
}

/// Metadata for a single note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMetadata {
    /// Slash separated, relative to the vault root
    pub path: String,
    pub title: String,
    pub size: u64,
    pub modified_at: String,
    pub tags: Vec<String>,
    pub issues: Vec<NoteIssue>,
}

/// Result of a vault scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub vault_path: String,
    pub scanned_at: String,
    pub notes: Vec<NoteMetadata>,
    pub health_score: u32,
}

/// The vault currently targeted by triage operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultConnectionInfo {
    pub path: String,
    pub has_obsidian_dir: bool,
    pub markdown_file_count: usize,
    pub connected_at: String,
}

/// Summary counters of a scanned vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultStatus {
    pub path: String,
    pub note_count: usize,
    pub inbox_count: usize,
    pub orphan_count: usize,
    pub broken_link_count: usize,
    pub health_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageActionKind {
    Move,
    Rename,
    Tag,
    Delete,
    Archive,
}

/// An action applied during triage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageAction {
    pub id: String,
    pub note_id: String,
    #[serde(rename = "type")]
    pub kind: TriageActionKind,
    pub params: serde_json::Map<String, serde_json::Value>,
    pub timestamp: String,
    pub undone: bool,
}

impl ScanResult {
    /// Counters derived from the scanned notes.
    pub fn status(&self) -> VaultStatus {
        let count = |issue: NoteIssue| {
            self.notes
                .iter()
                .filter(|n| n.issues.contains(&issue))
                .count()
        };

        VaultStatus {
            path: self.vault_path.clone(),
            note_count: self.notes.len(),
            inbox_count: count(NoteIssue::Inbox),
            orphan_count: count(NoteIssue::Orphan),
            broken_link_count: count(NoteIssue::BrokenLinks),
            health_score: self.health_score,
        }
    }
}
