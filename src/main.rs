use clap::Parser;
use contact_photo_sync::{cli, config, directory, disambiguator, error, reconcile, report, scanner, uploader, zoho};
use cli::{Cli, Commands};
use config::Config;
use disambiguator::{ConsoleDisambiguator, Disambiguator, FirstCandidate};
use error::Result;
use photo_sync_common::{CandidatePool, CaseMode};
use reconcile::Reconciler;
use std::path::{Path, PathBuf};
use uploader::Uploader;
use zoho::ZohoClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 診断ログはstderrへ（進捗表示はstdout）
    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Run { folder, ignore_case, first, report: report_path } => {
            println!("📸 photo-sync - 連絡先写真の更新\n");

            let client = ZohoClient::from_config(&config)?;
            let folder = folder.unwrap_or_else(|| config.photos_folder.clone());
            let case = CaseMode::from_ignore_case(ignore_case);

            let summary = if first {
                reconcile_folder(&client, &client, &mut FirstCandidate, &folder, case).await?
            } else {
                reconcile_folder(&client, &client, &mut ConsoleDisambiguator, &folder, case).await?
            };

            reconcile::print_summary(&summary);

            if let Some(path) = report_path {
                report::RunReport::new(&folder, &summary).save(&path)?;
                println!("\n✔ レポートを保存: {}", path.display());
            }
        }

        Commands::Plan { folder, ignore_case, first } => {
            println!("📝 photo-sync - 照合の確認（アップロードなし）\n");

            let client = ZohoClient::from_config(&config)?;
            let folder = folder.unwrap_or_else(|| config.photos_folder.clone());
            let case = CaseMode::from_ignore_case(ignore_case);
            let dry_run = uploader::DryRunUploader;

            let summary = if first {
                reconcile_folder(&client, &dry_run, &mut FirstCandidate, &folder, case).await?
            } else {
                reconcile_folder(&client, &dry_run, &mut ConsoleDisambiguator, &folder, case).await?
            };

            reconcile::print_summary(&summary);
        }

        Commands::Contacts { json } => {
            let client = ZohoClient::from_config(&config)?;
            let contacts = directory::fetch_all(&client).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
            } else {
                for contact in &contacts {
                    println!("{}", contact.label());
                }
                println!("\n{}件の連絡先", contacts.len());
            }
        }

        Commands::Config { set_cookie, set_csrf_token, show } => {
            let mut config = config;

            if let Some(cookie) = set_cookie {
                config.set_cookie(cookie)?;
                println!("✔ Cookieを設定しました");
            }

            if let Some(token) = set_csrf_token {
                config.set_csrf_token(token)?;
                println!("✔ CSRFトークンを設定しました");
            }

            if show {
                println!("設定 ({}):", Config::config_path()?.display());
                println!("  連絡先API: {}", config.contacts_base_url);
                println!("  メールAPI: {}", config.mail_base_url);
                println!("  ページサイズ: {}", config.page_size);
                println!("  写真フォルダ: {}", config.photos_folder.display());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  Cookie: {}", if config.cookie.is_some() { "設定済み" } else { "未設定" });
                println!("  CSRFトークン: {}", if config.csrf_token.is_some() { "設定済み" } else { "Cookieから取得" });
            }
        }
    }

    Ok(())
}

/// 連絡先取得 → 写真スキャン → 照合ループ
async fn reconcile_folder<U: Uploader, D: Disambiguator>(
    client: &ZohoClient,
    uploader: &U,
    disambiguator: &mut D,
    folder: &Path,
    case: CaseMode,
) -> Result<photo_sync_common::RunSummary> {
    // 1. 写真スキャン（連絡先取得前にフォルダの有無を確認）
    println!("[1/3] 写真をスキャン中...");
    let files = scanner::scan_folder(folder)?;
    println!("✔ {}枚の写真を検出\n", files.len());

    // 2. 連絡先取得
    println!("[2/3] 連絡先を取得中...");
    let contacts = directory::fetch_all(client).await?;
    println!("✔ {}件の連絡先を取得\n", contacts.len());

    // 3. 照合・アップロード
    println!("[3/3] 照合中...");
    let mut pool = CandidatePool::new(files);
    let mut reconciler =
        Reconciler::new(uploader, disambiguator, PathBuf::from(folder)).with_case(case);
    reconciler.run(&contacts, &mut pool).await
}
