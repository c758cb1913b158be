//! Contact Photo Sync Common Library
//!
//! 連絡先と写真ファイルの照合ロジック（I/Oを含まない部分）

pub mod choice;
pub mod directory;
pub mod error;
pub mod glob;
pub mod matcher;
pub mod pool;
pub mod response;
pub mod types;

pub use choice::parse_choice;
pub use directory::ContactCollector;
pub use error::{Error, Result};
pub use glob::{wildcard_match, CaseMode};
pub use matcher::{match_contact, name_keys};
pub use pool::CandidatePool;
pub use response::classify_upload;
pub use types::{Contact, ContactPage, MatchResult, RunSummary, UploadOutcome, UploadResponse};
