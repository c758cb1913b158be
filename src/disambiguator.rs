//! 候補写真の対話式選択モジュール
//!
//! 1件の連絡先に複数の写真がマッチした場合に、人が番号で1枚を選ぶ。

use crate::error::{PhotoSyncError, Result};
use dialoguer::Input;
use photo_sync_common::{parse_choice, Contact};

/// 複数候補から1つを選ぶ
pub trait Disambiguator {
    /// `candidates` の中から選ばれた番号（0始まり）を返す
    fn resolve(&mut self, contact: &Contact, candidates: &[String]) -> Result<usize>;
}

/// コンソールで番号入力を求める
///
/// 数値でない・範囲外の入力は再入力を求める。タイムアウトはない。
#[derive(Debug, Default)]
pub struct ConsoleDisambiguator;

impl Disambiguator for ConsoleDisambiguator {
    fn resolve(&mut self, contact: &Contact, candidates: &[String]) -> Result<usize> {
        println!("\n🔍 {} に複数の写真が見つかりました:", contact.label());
        for (i, name) in candidates.iter().enumerate() {
            println!("  {}) {}", i, name);
        }

        let len = candidates.len();
        let input: String = Input::new()
            .with_prompt(format!("番号を入力 [0-{}]", len.saturating_sub(1)))
            .validate_with(move |s: &String| -> std::result::Result<(), String> {
                parse_choice(s, len).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(|e| PhotoSyncError::Prompt(e.to_string()))?;

        Ok(parse_choice(&input, len)?)
    }
}

/// 常に先頭の候補を選ぶ（無人実行用）
#[derive(Debug, Default)]
pub struct FirstCandidate;

impl Disambiguator for FirstCandidate {
    fn resolve(&mut self, contact: &Contact, candidates: &[String]) -> Result<usize> {
        log::info!(
            "{}: {}件の候補から先頭を自動選択",
            contact.display_name(),
            candidates.len()
        );
        Ok(0)
    }
}
