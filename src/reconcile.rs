//! 照合ループ
//!
//! 連絡先を受け取った順に1件ずつ処理する:
//! 照合 → （複数候補なら選択）→ プールから除去 → アップロード → 集計。
//! 並列化もリトライもしない。プールはこのループだけが変更する。

use crate::disambiguator::Disambiguator;
use crate::error::{PhotoSyncError, Result};
use crate::uploader::Uploader;
use photo_sync_common::{
    match_contact, CandidatePool, CaseMode, Contact, MatchResult, RunSummary, UploadOutcome,
};
use std::path::PathBuf;

pub struct Reconciler<'a, U, D> {
    uploader: &'a U,
    disambiguator: &'a mut D,
    photos_folder: PathBuf,
    case: CaseMode,
}

impl<'a, U: Uploader, D: Disambiguator> Reconciler<'a, U, D> {
    pub fn new(uploader: &'a U, disambiguator: &'a mut D, photos_folder: PathBuf) -> Self {
        Self {
            uploader,
            disambiguator,
            photos_folder,
            case: CaseMode::default(),
        }
    }

    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    /// 全連絡先を処理して集計を返す
    pub async fn run(&mut self, contacts: &[Contact], pool: &mut CandidatePool) -> Result<RunSummary> {
        let mut summary = RunSummary {
            total_count: contacts.len(),
            ..Default::default()
        };

        for (i, contact) in contacts.iter().enumerate() {
            let name = contact.display_name();
            println!("[{}/{}] {}", i + 1, contacts.len(), name);

            let Some(selected) = self.select(contact, pool)? else {
                println!("  → 写真が見つかりません");
                summary.unmatched.push(name);
                continue;
            };

            // リモートの結果に関係なく、割り当てた時点で消費済み
            pool.remove(&selected);
            summary.matched_count += 1;

            let path = self.photos_folder.join(&selected);
            let photo = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("{} を読み込めません: {}", path.display(), e);
                    println!("  ✗ 写真を読み込めません: {} ({})", selected, e);
                    summary.failed.push(name);
                    continue;
                }
            };

            match self.uploader.upload(contact, &selected, photo).await? {
                UploadOutcome::Success { name } => {
                    println!("  ✔ 写真を更新しました: {} ← {}", name, selected);
                    summary.uploaded_count += 1;
                }
                UploadOutcome::Failure { name, payload } => {
                    log::warn!("アップロード拒否 {}: {}", name, payload);
                    println!("  ✗ 写真の更新に失敗しました: {}", name);
                    println!("    {}", payload);
                    summary.failed.push(name);
                }
            }
        }

        summary.leftover_files = pool.remaining();
        Ok(summary)
    }

    /// 照合して割り当てるファイルを決める
    fn select(&mut self, contact: &Contact, pool: &CandidatePool) -> Result<Option<String>> {
        match match_contact(contact, pool, self.case) {
            MatchResult::NoMatch => Ok(None),
            MatchResult::Unique(file) => Ok(Some(file)),
            MatchResult::Ambiguous(mut candidates) => {
                let index = self.disambiguator.resolve(contact, &candidates)?;
                if index >= candidates.len() {
                    return Err(PhotoSyncError::InvalidChoice {
                        index,
                        len: candidates.len(),
                    });
                }
                Ok(Some(candidates.swap_remove(index)))
            }
        }
    }
}

/// 実行結果のサマリーを表示
pub fn print_summary(summary: &RunSummary) {
    println!(
        "\n{}件中{}件の連絡先に写真をアップロードしました",
        summary.total_count, summary.uploaded_count
    );

    if !summary.failed.is_empty() {
        println!("\n⚠ アップロードに失敗: {}件", summary.failed.len());
        for name in &summary.failed {
            println!("  - {}", name);
        }
    }

    if !summary.unmatched.is_empty() {
        println!("\n写真が見つからなかった連絡先: {}件", summary.unmatched.len());
    }

    if !summary.leftover_files.is_empty() {
        println!("\n📁 使われなかった写真: {}枚", summary.leftover_files.len());
        for file in &summary.leftover_files {
            println!("  - {}", file);
        }
    }
}
