pub mod cli;
pub mod config;
pub mod directory;
pub mod disambiguator;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod scanner;
pub mod uploader;
pub mod zoho;
