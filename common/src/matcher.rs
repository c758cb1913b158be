//! 連絡先と写真ファイル名の照合
//!
//! 名前から作ったキーを具体的なものから順に試し、
//! 最初に候補が見つかったキーで確定する（それより弱いキーは試さない）。

use crate::glob::CaseMode;
use crate::pool::CandidatePool;
use crate::types::{Contact, MatchResult};

/// 試行するキーの一覧（優先順）
///
/// 1. `{first_name}*{last_name}`
/// 2. 会社名（設定されている場合）
pub fn name_keys(contact: &Contact) -> Vec<String> {
    let mut keys = vec![format!(
        "{}*{}",
        contact.first_name.trim(),
        contact.last_name.trim()
    )];
    if let Some(company) = contact.company_name() {
        keys.push(company.to_string());
    }
    keys
}

/// キーからファイル名パターンを作る
pub fn key_pattern(key: &str) -> String {
    format!("*{}*", key)
}

/// 連絡先に対応する写真を照合
///
/// 姓名がどちらも空（空白や `*` のみを含む）の連絡先は、キーが `**` 相当になり
/// すべてのファイルにマッチしてしまうため、キーを評価せずに `NoMatch` とする。
pub fn match_contact(contact: &Contact, pool: &CandidatePool, case: CaseMode) -> MatchResult {
    if !contact.has_matchable_name() {
        return MatchResult::NoMatch;
    }

    for key in name_keys(contact) {
        let candidates = pool.candidates_for(&key_pattern(&key), case);
        if !candidates.is_empty() {
            log::debug!("{}: キー '{}' で{}件", contact.display_name(), key, candidates.len());
            return MatchResult::from_candidates(candidates);
        }
    }

    MatchResult::NoMatch
}
