//! 実行結果のJSONレポート

use crate::error::Result;
use chrono::{DateTime, Local};
use photo_sync_common::RunSummary;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport<'a> {
    pub finished_at: DateTime<Local>,
    pub photos_folder: String,
    #[serde(flatten)]
    pub summary: &'a RunSummary,
}

impl<'a> RunReport<'a> {
    pub fn new(photos_folder: &Path, summary: &'a RunSummary) -> Self {
        Self {
            finished_at: Local::now(),
            photos_folder: photos_folder.display().to_string(),
            summary,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
