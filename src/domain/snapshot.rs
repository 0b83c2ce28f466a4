//! Point-in-time export of the ledger (the "backup .json").
//!
//! Field names are part of the backup format: `balance`, `items[]` (camelCase item fields,
//! RFC 3339 `listedAt`, `issuedKey` only when present) and `exportedAt`.

use crate::domain::catalog::CatalogItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub balance: u64,
    pub items: Vec<CatalogItem>,
    pub exported_at: DateTime<Utc>,
}

impl LedgerSnapshot {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// `steam-key-backup-YYYY-MM-DD.json`, dated by `exported_at`.
    pub fn file_name(&self) -> String {
        format!("steam-key-backup-{}.json", self.exported_at.format("%Y-%m-%d"))
    }

    /// Writes the pretty-printed snapshot into `dir` and returns the file path.
    /// An existing backup from the same day is overwritten.
    pub fn write_to_dir(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let content = self.to_json_pretty()?;
        fs::write(&path, content)?;
        Ok(path)
    }
}
