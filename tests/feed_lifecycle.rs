// tests/feed_lifecycle.rs

use std::path::Path;
use std::time::Duration;
use vibeshare::{
    Analysis, AnalysisResult, Analyzer, AppShell, EntryFormController, Field, LoadOutcome,
    PersistOutcome, SeedReason, SqliteBlobStore, View,
};

struct FixedAnalyzer;

impl Analyzer for FixedAnalyzer {
    fn analyze(&self, _prompt: &str) -> Analysis {
        Analysis::Generated(AnalysisResult {
            title: "채팅 앱".to_string(),
            summary: "실시간 채팅 애플리케이션입니다.".to_string(),
            tags: vec!["Chat".to_string(), "WebSocket".to_string()],
        })
    }
}

fn open(path: &Path) -> AppShell<SqliteBlobStore> {
    AppShell::open(SqliteBlobStore::open(path).unwrap())
}

fn submit(app: &mut AppShell<SqliteBlobStore>, prompt: &str, analyzer: Option<&dyn Analyzer>) -> String {
    app.show_create();
    let mut form = EntryFormController::new(Duration::ZERO);
    form.update_field(Field::Prompt, prompt);
    if let Some(analyzer) = analyzer {
        form.run_analysis(analyzer);
    }
    let entry = form.submit(1_700_000_000_000).unwrap();
    let id = entry.id.clone();
    app.handle_submit(entry).unwrap();
    id
}

fn ids(app: &AppShell<SqliteBlobStore>) -> Vec<String> {
    app.entries().iter().map(|e| e.id.clone()).collect()
}

fn rendered(app: &AppShell<SqliteBlobStore>) -> String {
    let mut buf = Vec::new();
    app.render(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn add_delete_and_reload_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("vibeshare.db");

    let mut app = open(&db);
    assert!(app.handle_delete("1").is_some());

    let a = submit(&mut app, "entry a", None);
    let b = submit(&mut app, "entry b", None);
    assert_eq!(app.view(), View::Feed);
    assert_eq!(ids(&app), [b.clone(), a.clone()]);

    assert_eq!(app.handle_delete(&a), Some(PersistOutcome::Saved { count: 1 }));
    assert_eq!(ids(&app), [b.clone()]);

    // 重新打开后看到同样的顺序
    drop(app);
    let mut app = open(&db);
    assert_eq!(app.load_outcome(), &LoadOutcome::Persisted { count: 1 });
    assert_eq!(ids(&app), [b.clone()]);

    assert_eq!(app.handle_delete(&b), Some(PersistOutcome::SkippedEmpty));
    assert!(app.entries().is_empty());
    assert!(rendered(&app).contains("등록된 Vibe가 없습니다"));

    // 空集合不会写入，重新加载后回到种子数据
    drop(app);
    let app = open(&db);
    assert_eq!(app.load_outcome(), &LoadOutcome::Seeded(SeedReason::Missing));
    assert_eq!(ids(&app), ["1"]);
    assert_ne!(ids(&app), [b]);
}

#[test]
fn deleting_seed_before_any_save_reverts_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("vibeshare.db");

    let mut app = open(&db);
    assert!(app.handle_delete("1").is_some());
    assert!(app.entries().is_empty());
    drop(app);

    let app = open(&db);
    assert_eq!(app.load_outcome(), &LoadOutcome::Seeded(SeedReason::Missing));
    assert_eq!(ids(&app), ["1"]);
}

#[test]
fn remove_unknown_id_keeps_feed() {
    let mut app = AppShell::open(SqliteBlobStore::open_in_memory().unwrap());
    let before = ids(&app);
    assert_eq!(app.handle_delete("nope"), None);
    assert_eq!(app.handle_delete("nope"), None);
    assert_eq!(ids(&app), before);
}

#[test]
fn analysed_entry_is_persisted_with_generated_fields() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("vibeshare.db");

    let mut app = open(&db);
    let id = submit(&mut app, "build a chat app", Some(&FixedAnalyzer));
    drop(app);

    let app = open(&db);
    let entry = app.store().get(&id).unwrap();
    assert_eq!(entry.title, "채팅 앱");
    assert_eq!(entry.tags, ["Chat", "WebSocket"]);
    assert_eq!(app.entries().len(), 2);
}

#[test]
fn submit_reports_saved_count() {
    let mut app = AppShell::open(SqliteBlobStore::open_in_memory().unwrap());
    let mut form = EntryFormController::new(Duration::ZERO);
    form.update_field(Field::Prompt, "landing page");
    let entry = form.submit(0).unwrap();
    assert_eq!(app.handle_submit(entry).unwrap(), PersistOutcome::Saved { count: 2 });
}
