//! 連絡先ディレクトリの取得
//!
//! ページ単位の取得は `PageSource` 実装に任せ、ここでは `has_more` が
//! false になるまで順にページを読み、重複を除いた一覧にまとめる。

use crate::error::{PhotoSyncError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use photo_sync_common::{Contact, ContactCollector, ContactPage};
use std::time::Duration;

#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// 1始まりのページ番号でページを取得
    async fn fetch_page(&self, page: u32) -> Result<ContactPage>;
}

/// 全ページを取得して連絡先一覧を返す
pub async fn fetch_all<S: PageSource>(source: &S) -> Result<Vec<Contact>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));

    let mut collector = ContactCollector::new();
    let mut page_number = 1;

    loop {
        spinner.set_message(format!("ページ {} をダウンロード中...", page_number));
        let page = match source.fetch_page(page_number).await {
            Ok(page) => page,
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        };

        let has_more = page.has_more;
        let page_len = page.contacts.len();
        let added = collector.push_page(page);
        log::info!("ページ {}: {}件 (新規 {}件)", page_number, page_len, added);

        if !has_more {
            break;
        }

        // has_more なのに空ページが返るのは無限ループになる
        if page_len == 0 {
            spinner.finish_and_clear();
            return Err(PhotoSyncError::DirectoryFetch(format!(
                "ページ {} が空なのに has_more が true です",
                page_number
            )));
        }

        page_number += 1;
    }

    spinner.finish_and_clear();
    Ok(collector.into_contacts())
}
