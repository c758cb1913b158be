use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoSyncError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("Cookieが設定されていません。`photo-sync config --set-cookie \"...\"` で設定するか ZOHO_COOKIE を指定してください")]
    MissingCredentials,

    #[error("CSRFトークンが見つかりません。`photo-sync config --set-csrf-token TOKEN` で設定してください")]
    MissingCsrfToken,

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("連絡先の取得に失敗: {0}")]
    DirectoryFetch(String),

    #[error("候補選択エラー: {0}")]
    Prompt(String),

    #[error("不正な候補番号: {index} (候補数 {len})")]
    InvalidChoice { index: usize, len: usize },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_sync_common::Error),
}

impl From<reqwest::Error> for PhotoSyncError {
    fn from(e: reqwest::Error) -> Self {
        PhotoSyncError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhotoSyncError>;
