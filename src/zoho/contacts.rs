use super::ZohoClient;
use crate::directory::PageSource;
use crate::error::{PhotoSyncError, Result};
use photo_sync_common::ContactPage;
use reqwest::header::COOKIE;

impl PageSource for ZohoClient {
    async fn fetch_page(&self, page: u32) -> Result<ContactPage> {
        let response = self
            .http
            .get(self.contacts_url(page))
            .header(COOKIE, &self.cookie)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PhotoSyncError::DirectoryFetch(format!(
                "ページ {}: HTTP {}: {}",
                page, status, body
            )));
        }

        ContactPage::parse(&body).map_err(|e| {
            PhotoSyncError::DirectoryFetch(format!("ページ {} のレスポンスを解析できません: {}", page, e))
        })
    }
}
