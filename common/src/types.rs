//! 照合処理の型定義
//!
//! - Contact: ディレクトリから取得した連絡先
//! - ContactPage: ディレクトリ一覧の1ページ
//! - MatchResult: 1件の連絡先に対する照合結果
//! - UploadOutcome: アップロード結果の分類
//! - RunSummary: 実行全体の集計

use serde::{Deserialize, Serialize};

/// 連絡先
///
/// `first_name` / `last_name` はソース側で欠けていても空文字列になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawContact")]
pub struct Contact {
    pub first_name: String,

    pub last_name: String,

    pub company: Option<String>,

    pub primary_email: Option<String>,

    /// アカウントID（Zohoの `zid`）
    #[serde(rename = "zid")]
    pub account_id: String,

    pub contact_id: String,
}

/// ディレクトリAPIが返す連絡先レコード
///
/// 会社名・メールアドレスは別名のキーでも届くため、両方を受け取って
/// 空でない方を採用する（同名キーが両方あってもエラーにしない）。
#[derive(Debug, Deserialize)]
struct RawContact {
    #[serde(default, deserialize_with = "null_as_empty")]
    first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    last_name: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    primary_email: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    zid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    contact_id: String,
}

impl From<RawContact> for Contact {
    fn from(raw: RawContact) -> Self {
        Self {
            first_name: raw.first_name,
            last_name: raw.last_name,
            company: first_present(raw.company, raw.company_name),
            primary_email: first_present(raw.primary_email, raw.email),
            account_id: raw.zid,
            contact_id: raw.contact_id,
        }
    }
}

fn first_present(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|v| !v.trim().is_empty())
        .or(fallback)
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 空白と `*` だけの文字列はキーとして使えない（全ファイルにマッチする）
pub fn is_blank_key(value: &str) -> bool {
    value.chars().all(|c| c == '*' || c.is_whitespace())
}

impl Contact {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Default::default()
        }
    }

    /// 空白や `*` だけの会社名は未設定とみなす
    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|c| !is_blank_key(c))
    }

    /// 照合キーに使える名前があるか
    pub fn has_matchable_name(&self) -> bool {
        !is_blank_key(&self.first_name) || !is_blank_key(&self.last_name)
    }

    /// 表示名（氏名、氏名が空なら会社名）
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        self.company_name().unwrap_or("(名前なし)").to_string()
    }

    /// 選択プロンプト用のラベル（メールアドレスがあれば併記）
    pub fn label(&self) -> String {
        match self.primary_email.as_deref().filter(|e| !e.is_empty()) {
            Some(email) => format!("{} <{}>", self.display_name(), email),
            None => self.display_name(),
        }
    }
}

/// ディレクトリ一覧の1ページ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPage {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub has_more: bool,
}

impl ContactPage {
    pub fn parse(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// 照合結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// 候補なし
    NoMatch,
    /// 候補が1件
    Unique(String),
    /// 候補が複数（プール順、2件以上）
    Ambiguous(Vec<String>),
}

impl MatchResult {
    pub fn from_candidates(mut candidates: Vec<String>) -> Self {
        match candidates.len() {
            0 => MatchResult::NoMatch,
            1 => MatchResult::Unique(candidates.remove(0)),
            _ => MatchResult::Ambiguous(candidates),
        }
    }
}

/// 写真アップロードAPIのレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// アップロード結果の分類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { name: String },
    /// 拒否された（生のレスポンスを保持）
    Failure { name: String, payload: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success { .. })
    }
}

/// 実行結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// アップロード成功数
    pub uploaded_count: usize,
    /// 処理した連絡先数
    pub total_count: usize,
    /// 写真が割り当てられた連絡先数（アップロード失敗を含む）
    pub matched_count: usize,
    /// 写真が見つからなかった連絡先
    #[serde(default)]
    pub unmatched: Vec<String>,
    /// アップロードに失敗した連絡先
    #[serde(default)]
    pub failed: Vec<String>,
    /// どの連絡先にも使われなかった写真
    #[serde(default)]
    pub leftover_files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_defaults_missing_names() {
        let json = r#"{"zid": "123", "contact_id": "456", "company_name": "Acme"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.first_name, "");
        assert_eq!(contact.last_name, "");
        assert_eq!(contact.company.as_deref(), Some("Acme"));
        assert_eq!(contact.account_id, "123");
        assert_eq!(contact.contact_id, "456");
    }

    #[test]
    fn test_contact_null_names() {
        let json = r#"{"first_name": null, "last_name": "Lee"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.first_name, "");
        assert_eq!(contact.last_name, "Lee");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Contact::new("Ann", "Lee").display_name(), "Ann Lee");
        assert_eq!(Contact::new("", "Lee").display_name(), "Lee");

        let company_only = Contact {
            company: Some("Acme".into()),
            ..Default::default()
        };
        assert_eq!(company_only.display_name(), "Acme");
        assert_eq!(Contact::default().display_name(), "(名前なし)");
    }

    #[test]
    fn test_label_with_email() {
        let contact = Contact {
            primary_email: Some("ann@example.com".into()),
            ..Contact::new("Ann", "Lee")
        };
        assert_eq!(contact.label(), "Ann Lee <ann@example.com>");
        assert_eq!(Contact::new("Ann", "Lee").label(), "Ann Lee");
    }

    #[test]
    fn test_company_and_company_name_both_present() {
        let json = r#"{"first_name": "Ann", "company": "Acme", "company_name": "Acme Corp"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.company.as_deref(), Some("Acme"));

        let json = r#"{"first_name": "Ann", "company": "", "company_name": "Acme Corp"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_email_keys_both_present() {
        let json = r#"{"first_name": "Ann", "primary_email": "ann@example.com", "email": "old@example.com"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.primary_email.as_deref(), Some("ann@example.com"));

        let json = r#"{"first_name": "Ann", "email": "ann@example.com"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.primary_email.as_deref(), Some("ann@example.com"));
    }

    #[test]
    fn test_page_with_duplicate_company_keys_parses() {
        let body = r#"{"contacts": [{"first_name": "Ann", "company": "A", "company_name": "B"}], "has_more": false}"#;
        assert_eq!(ContactPage::parse(body).unwrap().contacts.len(), 1);
    }

    #[test]
    fn test_contact_serializes_zid() {
        let contact = Contact {
            account_id: "123".into(),
            ..Contact::new("Ann", "Lee")
        };
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains(r#""zid":"123""#));
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_blank_key_detection() {
        assert!(is_blank_key(""));
        assert!(is_blank_key("  "));
        assert!(is_blank_key(" * "));
        assert!(!is_blank_key("Ann"));
        assert!(!Contact::new(" ", "*").has_matchable_name());
        assert!(Contact::new(" ", "Lee").has_matchable_name());
    }

    #[test]
    fn test_star_only_company_is_absent() {
        let contact = Contact {
            company: Some(" * ".into()),
            ..Default::default()
        };
        assert_eq!(contact.company_name(), None);
    }

    #[test]
    fn test_blank_company_is_absent() {
        let contact = Contact {
            company: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(contact.company_name(), None);
    }

    #[test]
    fn test_match_result_from_candidates() {
        assert_eq!(MatchResult::from_candidates(vec![]), MatchResult::NoMatch);
        assert_eq!(
            MatchResult::from_candidates(vec!["a.jpg".into()]),
            MatchResult::Unique("a.jpg".into())
        );
        assert_eq!(
            MatchResult::from_candidates(vec!["a.jpg".into(), "b.jpg".into()]),
            MatchResult::Ambiguous(vec!["a.jpg".into(), "b.jpg".into()])
        );
    }

    #[test]
    fn test_contact_page_parse() {
        let body = r#"{"contacts": [{"first_name": "Ann"}], "has_more": true}"#;
        let page = ContactPage::parse(body).unwrap();
        assert_eq!(page.contacts.len(), 1);
        assert!(page.has_more);
        assert_eq!(page.contacts[0].last_name, "");
    }

    #[test]
    fn test_contact_page_parse_error() {
        assert!(ContactPage::parse("<html>login</html>").is_err());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = RunSummary {
            uploaded_count: 1,
            total_count: 2,
            ..Default::default()
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("uploadedCount"));
        assert!(json.contains("leftoverFiles"));
    }
}
