// src/lib.rs

pub mod analysis;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod feed;
pub mod form;
pub mod logging;
pub mod models;
pub mod store;

pub use analysis::{Analysis, Analyzer, GeminiClient, StaticAnalyzer};
pub use app::AppShell;
pub use db::{BlobStore, SqliteBlobStore};
pub use error::{Result, VibeError};
pub use form::{EntryFormController, Field};
pub use models::{AnalysisResult, Entry, View};
pub use store::{EntryStore, LoadOutcome, PersistOutcome, SeedReason};
