use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-sync")]
#[command(about = "連絡先に写真フォルダの写真を照合してアップロードするツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 連絡先を取得し、写真を照合してアップロード
    Run {
        /// 写真フォルダのパス（省略時は設定値）
        folder: Option<PathBuf>,

        /// ファイル名の大文字小文字を区別しない
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// 複数候補があるときは先頭を自動選択（対話なし）
        #[arg(long)]
        first: bool,

        /// 実行結果をJSONで保存
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// アップロードせずに照合結果だけを確認
    Plan {
        /// 写真フォルダのパス（省略時は設定値）
        folder: Option<PathBuf>,

        /// ファイル名の大文字小文字を区別しない
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// 複数候補があるときは先頭を自動選択（対話なし）
        #[arg(long)]
        first: bool,
    },

    /// 連絡先一覧を表示
    Contacts {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// セッションCookieを設定
        #[arg(long)]
        set_cookie: Option<String>,

        /// CSRFトークンを設定（省略時はCookieから取得）
        #[arg(long)]
        set_csrf_token: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["photo-sync", "run", "pics", "-i", "--report", "out.json"]);
        match cli.command {
            Commands::Run { folder, ignore_case, first, report } => {
                assert_eq!(folder, Some(PathBuf::from("pics")));
                assert!(ignore_case);
                assert!(!first);
                assert_eq!(report, Some(PathBuf::from("out.json")));
            }
            _ => panic!("Expected Run"),
        }
    }

    #[test]
    fn test_parse_plan_defaults() {
        let cli = Cli::parse_from(["photo-sync", "plan", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Plan { folder: None, ignore_case: false, first: false }));
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
