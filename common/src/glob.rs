//! ファイル名ワイルドカード照合
//!
//! `*` のみを任意長（0文字を含む）のワイルドカードとして扱う。
//! それ以外の文字（`?` や `[` も含む）はすべてリテラル。
//! ファイルシステムには依存しない純粋関数。

/// 大文字小文字の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// 区別する（Linux等のファイルシステム既定）
    #[default]
    Sensitive,
    /// 区別しない（macOS/Windowsの既定ボリューム向け）
    Insensitive,
}

impl CaseMode {
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }
}

/// パターンがテキスト全体にマッチするか判定
///
/// # Examples
/// ```
/// use photo_sync_common::{wildcard_match, CaseMode};
///
/// assert!(wildcard_match("*Ann*Lee*", "Ann_Lee_2019.jpg", CaseMode::Sensitive));
/// assert!(!wildcard_match("*Ann*Lee*", "Lee Ann.jpg", CaseMode::Sensitive));
/// ```
pub fn wildcard_match(pattern: &str, text: &str, case: CaseMode) -> bool {
    match case {
        CaseMode::Sensitive => {
            let p: Vec<char> = pattern.chars().collect();
            let t: Vec<char> = text.chars().collect();
            match_chars(&p, &t)
        }
        CaseMode::Insensitive => {
            let p: Vec<char> = pattern.chars().flat_map(char::to_lowercase).collect();
            let t: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
            match_chars(&p, &t)
        }
    }
}

/// スター位置へのバックトラックによる照合
fn match_chars(pattern: &[char], text: &[char]) -> bool {
    let (mut p, mut t) = (0, 0);
    // 直前の `*` の位置と、その `*` が吸収を始めたテキスト位置
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some((star_p, star_t)) = star {
            // `*` にもう1文字吸収させて再試行
            p = star_p + 1;
            t = star_t + 1;
            star = Some((star_p, star_t + 1));
        } else {
            return false;
        }
    }

    // 残りのパターンはすべて `*` でなければならない
    pattern[p..].iter().all(|&c| c == '*')
}
