use super::ZohoClient;
use crate::error::Result;
use crate::uploader::{mime_for, Uploader};
use photo_sync_common::{classify_upload, Contact, UploadOutcome};
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};

impl Uploader for ZohoClient {
    async fn upload(&self, contact: &Contact, file_name: &str, photo: Vec<u8>) -> Result<UploadOutcome> {
        if contact.account_id.is_empty() || contact.contact_id.is_empty() {
            return Ok(UploadOutcome::Failure {
                name: contact.display_name(),
                payload: "アカウントIDまたは連絡先IDがありません".into(),
            });
        }

        let part = Part::bytes(photo)
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name))?;
        let form = Form::new().part("photo", part);

        let response = self
            .http
            .post(self.photo_url(&contact.account_id, &contact.contact_id))
            .header(COOKIE, &self.cookie)
            .header("x-zcsrf-token", self.csrf_header())
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("upload {}: HTTP {} {}", contact.display_name(), status, body);

        Ok(classify_upload(&contact.display_name(), status, &body))
    }
}
