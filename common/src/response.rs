//! アップロードAPIレスポンスの分類
//!
//! 通信処理とは切り離した純粋関数。成功条件:
//! - HTTPステータスが2xx
//! - `status_code` が 200
//! - `message` が "Photo Uploaded"

use crate::types::{UploadOutcome, UploadResponse};

pub const UPLOAD_OK_STATUS: i64 = 200;
pub const UPLOAD_OK_MESSAGE: &str = "Photo Uploaded";

/// デコード済みレスポンスが成功を示しているか
pub fn is_upload_ok(response: &UploadResponse) -> bool {
    response.status_code == Some(UPLOAD_OK_STATUS)
        && response.message.as_deref() == Some(UPLOAD_OK_MESSAGE)
}

/// HTTPステータスと本文からアップロード結果を分類
pub fn classify_upload(name: &str, http_status: u16, body: &str) -> UploadOutcome {
    let ok = (200..300).contains(&http_status)
        && serde_json::from_str::<UploadResponse>(body)
            .map(|r| is_upload_ok(&r))
            .unwrap_or(false);

    if ok {
        UploadOutcome::Success { name: name.to_string() }
    } else {
        UploadOutcome::Failure {
            name: name.to_string(),
            payload: body.to_string(),
        }
    }
}
