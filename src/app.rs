// src/app.rs

use crate::db::BlobStore;
use crate::error::Result;
use crate::feed::{self, FeedAction};
use crate::models::{Entry, View};
use crate::store::{EntryStore, LoadOutcome, PersistOutcome};
use log::info;
use std::io::{self, Write};

/// 会话对象：持有视图状态和条目集合
pub struct AppShell<B: BlobStore> {
    blob: B,
    store: EntryStore,
    view: View,
    load_outcome: LoadOutcome,
}

impl<B: BlobStore> AppShell<B> {
    pub fn open(blob: B) -> Self {
        let (store, load_outcome) = EntryStore::load(&blob);
        info!("event=app_open view=feed entries={}", store.len());
        Self {
            blob,
            store,
            view: View::Feed,
            load_outcome,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn show_create(&mut self) {
        self.view = View::Create;
    }

    pub fn show_feed(&mut self) {
        self.view = View::Feed;
    }

    pub fn handle_submit(&mut self, entry: Entry) -> Result<PersistOutcome> {
        self.store.add(entry)?;
        self.view = View::Feed;
        Ok(self.store.persist(&self.blob))
    }

    /// 没有匹配的条目时返回 None，否则返回写入结果
    pub fn handle_delete(&mut self, id: &str) -> Option<PersistOutcome> {
        if !self.store.remove(id) {
            return None;
        }
        Some(self.store.persist(&self.blob))
    }

    pub fn dispatch(&mut self, action: FeedAction) -> Option<PersistOutcome> {
        match action {
            FeedAction::Delete(id) => self.handle_delete(&id),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.view {
            View::Feed => feed::render_feed(self.store.entries(), out),
            View::Create => {
                writeln!(out, "결과 공유")?;
                writeln!(out, "팀을 위한 Vibe Coding 결과물을 아카이브하세요.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteBlobStore;
    use crate::error::VibeError;
    use crate::store::SeedReason;

    #[test]
    fn opens_on_feed_with_seed() {
        let app = AppShell::open(SqliteBlobStore::open_in_memory().unwrap());
        assert_eq!(app.view(), View::Feed);
        assert_eq!(app.load_outcome(), &LoadOutcome::Seeded(SeedReason::Missing));
        assert_eq!(app.entries().len(), 1);
    }

    #[test]
    fn submit_returns_to_feed() {
        let mut app = AppShell::open(SqliteBlobStore::open_in_memory().unwrap());
        app.show_create();
        assert_eq!(app.view(), View::Create);

        let mut entry = app.entries()[0].clone();
        entry.id = "new".to_string();
        let outcome = app.handle_submit(entry).unwrap();
        assert_eq!(outcome, PersistOutcome::Saved { count: 2 });
        assert_eq!(app.view(), View::Feed);
        assert_eq!(app.entries()[0].id, "new");
    }

    struct BrokenBlob;

    impl BlobStore for BrokenBlob {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(VibeError::Io(std::io::Error::other("read-only")))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(VibeError::Io(std::io::Error::other("read-only")))
        }
    }

    fn entry_with_id(app: &AppShell<impl BlobStore>, id: &str) -> Entry {
        let mut entry = app.entries()[0].clone();
        entry.id = id.to_string();
        entry
    }

    #[test]
    fn dispatch_delete_by_id() {
        let mut app = AppShell::open(SqliteBlobStore::open_in_memory().unwrap());
        assert_eq!(app.dispatch(FeedAction::Delete("missing".to_string())), None);
        assert_eq!(
            app.dispatch(FeedAction::Delete("1".to_string())),
            Some(PersistOutcome::SkippedEmpty)
        );
        assert!(app.entries().is_empty());
    }

    #[test]
    fn delete_reports_saved_count() {
        let mut app = AppShell::open(SqliteBlobStore::open_in_memory().unwrap());
        let extra = entry_with_id(&app, "extra");
        app.handle_submit(extra).unwrap();
        assert_eq!(app.handle_delete("1"), Some(PersistOutcome::Saved { count: 1 }));
    }

    #[test]
    fn delete_reports_write_failure() {
        let mut app = AppShell::open(BrokenBlob);
        let extra = entry_with_id(&app, "extra");
        assert!(matches!(app.handle_submit(extra).unwrap(), PersistOutcome::Failed(_)));

        assert!(matches!(app.handle_delete("extra"), Some(PersistOutcome::Failed(_))));
        assert!(matches!(app.handle_delete("1"), Some(PersistOutcome::Failed(_))));
        assert!(app.entries().is_empty());
    }
}
