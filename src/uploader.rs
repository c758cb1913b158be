//! 写真アップロードの抽象
//!
//! 通信結果の成否分類は `photo_sync_common::classify_upload` が担う。
//! 通信そのものの失敗（接続不可など）は `Err` として呼び出し元に返す。

use crate::error::Result;
use photo_sync_common::{Contact, UploadOutcome};

#[allow(async_fn_in_trait)]
pub trait Uploader {
    async fn upload(&self, contact: &Contact, file_name: &str, photo: Vec<u8>) -> Result<UploadOutcome>;
}

/// 通信せずに成功扱いにする（planコマンド用）
#[derive(Debug, Default)]
pub struct DryRunUploader;

impl Uploader for DryRunUploader {
    async fn upload(&self, contact: &Contact, file_name: &str, photo: Vec<u8>) -> Result<UploadOutcome> {
        log::debug!("dry-run: {} ← {} ({} bytes)", contact.display_name(), file_name, photo.len());
        Ok(UploadOutcome::Success { name: contact.display_name() })
    }
}

/// 画像の拡張子からMIMEタイプを推定
pub fn mime_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("Ann Lee.jpg"), "image/jpeg");
        assert_eq!(mime_for("Ann Lee.JPEG"), "image/jpeg");
        assert_eq!(mime_for("Acme.PNG"), "image/png");
    }

    #[tokio::test]
    async fn test_dry_run_always_succeeds() {
        let outcome = DryRunUploader
            .upload(&Contact::new("Ann", "Lee"), "Ann Lee.jpg", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(outcome, UploadOutcome::Success { name: "Ann Lee".into() });
    }
}
