//! Zoho Contacts / Zoho Mail 連携
//!
//! 認証はブラウザセッションのCookieをそのまま送る。
//! 写真アップロードには Cookie 内の CSRF_TOKEN を
//! `x-zcsrf-token: conreqcsr=...` ヘッダとして付ける必要がある。

mod contacts;
mod photo;

use crate::config::Config;
use crate::error::Result;
use std::time::Duration;

pub struct ZohoClient {
    http: reqwest::Client,
    contacts_base_url: String,
    mail_base_url: String,
    page_size: u32,
    cookie: String,
    csrf_token: String,
}

impl ZohoClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let cookie = config.get_cookie()?;
        let csrf_token = config.get_csrf_token(&cookie)?;
        Self::with_credentials(config, cookie, csrf_token)
    }

    /// 認証情報を決定済みの状態で作成
    pub fn with_credentials(config: &Config, cookie: String, csrf_token: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            contacts_base_url: config.contacts_base_url.trim_end_matches('/').to_string(),
            mail_base_url: config.mail_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
            cookie,
            csrf_token,
        })
    }

    fn contacts_url(&self, page: u32) -> String {
        format!(
            "{}/api/v1/accounts/self/contacts?page={}&per_page={}",
            self.contacts_base_url, page, self.page_size
        )
    }

    fn photo_url(&self, account_id: &str, contact_id: &str) -> String {
        format!(
            "{}/zm/zc/api/v1/accounts/{}/contacts/{}/photo",
            self.mail_base_url, account_id, contact_id
        )
    }

    fn csrf_header(&self) -> String {
        format!("conreqcsr={}", self.csrf_token)
    }
}
