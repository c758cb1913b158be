//! 候補写真プール
//!
//! 1回の実行中にまだどの連絡先にも割り当てられていない写真ファイル名の集合。
//! ディレクトリ一覧の順序を保持し、割り当てられたファイルは一度だけ取り除かれる。

use crate::glob::{wildcard_match, CaseMode};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    files: Vec<String>,
}

impl CandidatePool {
    /// 一覧順のままプールを作成（重複名は先勝ち）
    pub fn new(files: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let files = files
            .into_iter()
            .filter(|f| seen.insert(f.clone()))
            .collect();
        Self { files }
    }

    /// パターンにマッチするファイル名をプール順で返す
    pub fn candidates_for(&self, pattern: &str, case: CaseMode) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| wildcard_match(pattern, f, case))
            .cloned()
            .collect()
    }

    /// ファイルを取り除く
    ///
    /// 既に無い場合は警告ログを出して `false` を返す。
    pub fn remove(&mut self, file_name: &str) -> bool {
        match self.files.iter().position(|f| f == file_name) {
            Some(idx) => {
                self.files.remove(idx);
                true
            }
            None => {
                log::warn!("プールに存在しないファイルの削除要求: {}", file_name);
                false
            }
        }
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }

    /// 残りのファイル名（一覧順）
    pub fn remaining(&self) -> Vec<String> {
        self.files.clone()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
