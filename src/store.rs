// src/store.rs

use crate::db::{BlobStore, ENTRIES_KEY};
use crate::error::{Result, VibeError};
use crate::models::{seed_entries, Entry};
use log::{debug, error, warn};

/// 使用种子数据的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReason {
    Missing,
    ReadFailed(String),
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Persisted { count: usize },
    Seeded(SeedReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved { count: usize },
    /// 空集合不会写入；旧快照被清除，重新加载后回到种子数据
    SkippedEmpty,
    Failed(String),
}

/// 内存中的有序集合，最新的在前
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// 从快照加载；任何读取或解析失败都回退到种子数据
    pub fn load(blob: &dyn BlobStore) -> (Self, LoadOutcome) {
        let reason = match blob.read(ENTRIES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Entry>>(&raw) {
                Ok(entries) => {
                    let count = entries.len();
                    debug!("event=store_load status=ok count={}", count);
                    return (Self::new(entries), LoadOutcome::Persisted { count });
                }
                Err(e) => {
                    error!("event=store_load status=malformed error={}", e);
                    SeedReason::Malformed(e.to_string())
                }
            },
            Ok(None) => SeedReason::Missing,
            Err(e) => {
                error!("event=store_load status=read_failed error={}", e);
                SeedReason::ReadFailed(e.to_string())
            }
        };

        let now = chrono::Utc::now().timestamp_millis();
        (Self::new(seed_entries(now)), LoadOutcome::Seeded(reason))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 插入到最前面
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        if self.get(&entry.id).is_some() {
            return Err(VibeError::DuplicateId(entry.id));
        }
        self.entries.insert(0, entry);
        Ok(())
    }

    /// 按 id 删除，不存在时不做任何事
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// 整体覆盖写入快照
    pub fn persist(&self, blob: &dyn BlobStore) -> PersistOutcome {
        if self.entries.is_empty() {
            warn!("event=store_persist status=skipped_empty");
            if let Err(e) = blob.remove(ENTRIES_KEY) {
                error!("event=store_clear status=failed error={}", e);
                return PersistOutcome::Failed(e.to_string());
            }
            return PersistOutcome::SkippedEmpty;
        }

        let written = serde_json::to_string(&self.entries)
            .map_err(VibeError::from)
            .and_then(|raw| blob.write(ENTRIES_KEY, &raw));

        match written {
            Ok(()) => {
                debug!("event=store_persist status=ok count={}", self.entries.len());
                PersistOutcome::Saved {
                    count: self.entries.len(),
                }
            }
            Err(e) => {
                error!("event=store_persist status=failed error={}", e);
                PersistOutcome::Failed(e.to_string())
            }
        }
    }
}
