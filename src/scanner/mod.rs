use crate::error::{PhotoSyncError, Result};
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 写真フォルダ直下の画像ファイル名を一覧（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<String>> {
    if !folder.is_dir() {
        return Err(PhotoSyncError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if !is_image {
            continue;
        }

        // 変換したファイル名では後で開けないため、UTF-8でない名前は対象外
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => files.push(name.to_string()),
            None => log::warn!("UTF-8でないファイル名をスキップ: {}", path.display()),
        }
    }

    // 実行ごとに同じ順序で候補を提示するためソート
    files.sort();

    Ok(files)
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}
