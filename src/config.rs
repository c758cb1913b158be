use crate::error::{PhotoSyncError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

lazy_static::lazy_static! {
    static ref CSRF_COOKIE: regex::Regex =
        regex::Regex::new(r"(?:^|;)\s*CSRF_TOKEN=([^;]+)").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub contacts_base_url: String,
    pub mail_base_url: String,
    pub page_size: u32,
    pub photos_folder: PathBuf,
    pub timeout_seconds: u64,
    /// ブラウザからコピーしたCookieヘッダ
    pub cookie: Option<String>,
    pub csrf_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_base_url: "https://contacts.zoho.com".into(),
            mail_base_url: "https://mail.zoho.com".into(),
            page_size: 100,
            photos_folder: PathBuf::from("photos"),
            timeout_seconds: 60,
            cookie: None,
            csrf_token: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoSyncError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-sync").join("config.json"))
    }

    pub fn get_cookie(&self) -> Result<String> {
        self.cookie_with_env(std::env::var("ZOHO_COOKIE").ok())
    }

    /// 環境変数の値（あれば）を優先してCookieを決める
    pub fn cookie_with_env(&self, env_cookie: Option<String>) -> Result<String> {
        pick_credential(env_cookie, self.cookie.as_deref()).ok_or(PhotoSyncError::MissingCredentials)
    }

    /// CSRFトークン（環境変数 → 明示指定 → Cookie内の CSRF_TOKEN の順）
    pub fn get_csrf_token(&self, cookie: &str) -> Result<String> {
        self.csrf_token_with_env(std::env::var("ZOHO_CSRF_TOKEN").ok(), cookie)
    }

    pub fn csrf_token_with_env(&self, env_token: Option<String>, cookie: &str) -> Result<String> {
        pick_credential(env_token, self.csrf_token.as_deref())
            .or_else(|| csrf_from_cookie(cookie))
            .ok_or(PhotoSyncError::MissingCsrfToken)
    }

    pub fn set_cookie(&mut self, cookie: String) -> Result<()> {
        self.cookie = Some(cookie);
        self.save()
    }

    pub fn set_csrf_token(&mut self, token: String) -> Result<()> {
        self.csrf_token = Some(token);
        self.save()
    }
}

/// 空でない方を採用（環境変数が優先）
fn pick_credential(env_value: Option<String>, configured: Option<&str>) -> Option<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.filter(|v| !v.trim().is_empty()).map(str::to_string))
}

/// Cookieヘッダ文字列から CSRF_TOKEN の値を取り出す
pub fn csrf_from_cookie(cookie: &str) -> Option<String> {
    CSRF_COOKIE
        .captures(cookie)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
}
