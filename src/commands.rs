// src/commands.rs

use crate::analysis::{Analysis, Analyzer, GeminiClient, StaticAnalyzer};
use crate::app::AppShell;
use crate::cli::CreateArgs;
use crate::config::Config;
use crate::db::{BlobStore, SqliteBlobStore};
use crate::error::{Result, VibeError};
use crate::feed;
use crate::form::{EntryFormController, Field};
use crate::store::{LoadOutcome, PersistOutcome};
use std::env;
use std::io::{self, Read, Write};
use std::process::Command;

fn open_app(config: &Config) -> Result<AppShell<SqliteBlobStore>> {
    let blob = SqliteBlobStore::open(&config.db_path)?;
    Ok(AppShell::open(blob))
}

/// 打开编辑器读取多行文本
fn read_from_editor() -> Result<String> {
    let temp_file = tempfile::NamedTempFile::new()?;
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor).arg(temp_file.path()).status()?;

    if !status.success() {
        return Err(VibeError::EditorError);
    }
    let mut buf = String::new();
    temp_file.reopen()?.read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_analysis<W: Write>(analysis: &Analysis, out: &mut W) -> io::Result<()> {
    let result = analysis.result();
    writeln!(out, "AI 분석 결과:")?;
    writeln!(out, "  {}", result.title)?;
    writeln!(out, "  {}", result.summary)?;
    writeln!(out, "  #{}", result.tags.join(" #"))?;
    if let Analysis::Fallback { reason, .. } = analysis {
        writeln!(out, "  (fallback: {})", reason)?;
    }
    Ok(())
}

/// 处理 'init' 命令
pub fn handle_init(config: &Config) -> Result<()> {
    let blob = SqliteBlobStore::open(&config.db_path)?;
    println!("✓ Database initialized at: {}", config.db_path.display());
    if blob.read(crate::db::ENTRIES_KEY)?.is_none() {
        println!("No entries saved yet; the feed will show the sample entry.");
    }
    Ok(())
}

/// 处理 'feed' 命令
pub fn handle_feed(config: &Config) -> Result<()> {
    let app = open_app(config)?;
    if let LoadOutcome::Seeded(reason) = app.load_outcome() {
        log::debug!("event=feed_seeded reason={:?}", reason);
    }
    app.render(&mut io::stdout().lock())?;
    Ok(())
}

/// 处理 'create' 命令
pub fn handle_create(config: &Config, args: CreateArgs) -> Result<()> {
    let prompt = match args.prompt {
        Some(p) => p,
        None => read_from_editor()?,
    };
    if prompt.trim().is_empty() {
        eprintln!("Empty prompt, skipped.");
        return Ok(());
    }

    let mut app = open_app(config)?;
    app.show_create();
    app.render(&mut io::stdout().lock())?;

    let mut form = EntryFormController::new(config.submit_delay);
    form.update_field(Field::Prompt, prompt);
    form.update_field(Field::BuilderUrl, args.builder_url.unwrap_or_default());
    form.update_field(Field::RepoUrl, args.repo_url.unwrap_or_default());
    form.update_field(Field::DeployUrl, args.deploy_url.unwrap_or_default());
    form.update_field(Field::Author, args.author.unwrap_or_default());

    if args.analyze {
        println!("분석 중...");
        let analyzer: Box<dyn Analyzer> = if args.offline {
            Box::new(StaticAnalyzer)
        } else {
            Box::new(GeminiClient::new(config.analysis.clone()))
        };
        if let Some(analysis) = form.run_analysis(analyzer.as_ref()) {
            print_analysis(analysis, &mut io::stdout().lock())?;
        }
    }

    println!("게시 중...");
    let entry = form.submit(chrono::Utc::now().timestamp_millis())?;
    let id = entry.id.clone();
    match app.handle_submit(entry)? {
        PersistOutcome::Saved { .. } => println!("✓ Entry {} recorded.", id),
        PersistOutcome::Failed(e) => {
            eprintln!("Warning: entry {} could not be saved and will be lost on exit: {}", id, e)
        }
        PersistOutcome::SkippedEmpty => {}
    }
    println!();
    app.render(&mut io::stdout().lock())?;
    Ok(())
}

/// 处理 'analyze' 命令
pub fn handle_analyze(config: &Config, prompt: Option<String>) -> Result<()> {
    let prompt = match prompt {
        Some(p) => p,
        None => read_from_editor()?,
    };
    if prompt.trim().is_empty() {
        return Err(VibeError::InvalidInput("prompt must not be empty".to_string()));
    }
    let analysis = GeminiClient::new(config.analysis.clone()).analyze(&prompt);
    print_analysis(&analysis, &mut io::stdout().lock())?;
    Ok(())
}

/// 处理 'show' 命令
pub fn handle_show(config: &Config, id: &str) -> Result<()> {
    let app = open_app(config)?;
    let entry = app
        .store()
        .get(id)
        .ok_or_else(|| VibeError::EntryNotFound(id.to_string()))?;
    feed::render_entry_detail(entry, &mut io::stdout().lock())?;
    Ok(())
}

/// 处理 'del' 命令
pub fn handle_del(config: &Config, ids: &[String]) -> Result<()> {
    let mut app = open_app(config)?;
    let mut deleted = 0;
    for id in ids {
        match app.dispatch(feed::FeedAction::Delete(id.clone())) {
            None => println!("- Entry {} not found, skipped.", id),
            Some(outcome) => {
                deleted += 1;
                match outcome {
                    PersistOutcome::Saved { .. } => {}
                    PersistOutcome::SkippedEmpty => println!(
                        "The feed is now empty; this state is not saved, so the sample entry returns next time."
                    ),
                    PersistOutcome::Failed(e) => eprintln!(
                        "Warning: deletion of entry {} could not be saved and will be undone on the next run: {}",
                        id, e
                    ),
                }
            }
        }
    }
    println!("✓ Deleted {} entr{}.", deleted, if deleted == 1 { "y" } else { "ies" });
    Ok(())
}
