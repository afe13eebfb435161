//! Debounced per-skill settings documents
//!
//! One `PersistedMap` instance backs each persisted document. The in-memory
//! map is authoritative immediately; writes to the settings collaborator are
//! coalesced behind a quiet period, restarting on every change so a burst of
//! adjustments produces a single write (last-write-wins). Dropping the map
//! aborts a pending write - durability on teardown comes from the context
//! calling `flush()` first.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::core::error::{RequestError, Result};
use crate::core::types::SkillId;
use crate::host::traits::SettingsStore;

/// Quiet period before a change burst is written out
pub const PERSIST_QUIET: Duration = Duration::from_millis(500);

/// A skill-keyed settings document with debounced persistence
///
/// Entries are created lazily and never deleted individually; `reset`
/// clears the whole document. Must be used inside a Tokio runtime - the
/// flush timer runs as a spawned task.
pub struct PersistedMap<V> {
    namespace: &'static str,
    key: &'static str,
    quiet: Duration,
    store: Arc<dyn SettingsStore>,
    entries: Arc<Mutex<HashMap<SkillId, V>>>,
    dirty: Arc<AtomicBool>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<V> PersistedMap<V>
where
    V: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(
        namespace: &'static str,
        key: &'static str,
        store: Arc<dyn SettingsStore>,
        quiet: Duration,
    ) -> Self {
        Self {
            namespace,
            key,
            quiet,
            store,
            entries: Arc::new(Mutex::new(HashMap::new())),
            dirty: Arc::new(AtomicBool::new(false)),
            pending: Mutex::new(None),
        }
    }

    /// Replace the in-memory map with the persisted document
    ///
    /// A missing or unreadable document degrades to an empty map.
    pub fn load(&self) {
        match self.store.get(self.namespace, self.key) {
            Some(value) => match serde_json::from_value(value) {
                Ok(map) => *self.entries.lock() = map,
                Err(e) => warn!(key = self.key, "discarding unreadable settings document: {e}"),
            },
            None => debug!(key = self.key, "no persisted document, starting empty"),
        }
    }

    pub fn get(&self, id: &SkillId) -> Option<V> {
        self.entries.lock().get(id).cloned()
    }

    pub fn insert(&self, id: SkillId, value: V) {
        self.entries.lock().insert(id, value);
        self.mark_dirty();
    }

    /// Clear all entries (bulk reset is the only way entries disappear)
    pub fn reset(&self) {
        self.entries.lock().clear();
        self.mark_dirty();
    }

    /// Swap in a full document, e.g. from a settings import
    pub fn replace(&self, entries: HashMap<SkillId, V>) {
        *self.entries.lock() = entries;
        self.mark_dirty();
    }

    pub fn snapshot(&self) -> HashMap<SkillId, V> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Whether a change is still waiting for its debounced write
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        self.schedule_flush();
    }

    /// Restart the quiet-period timer; the previous pending write is
    /// superseded (last-write-wins)
    fn schedule_flush(&self) {
        let entries = Arc::clone(&self.entries);
        let store = Arc::clone(&self.store);
        let dirty = Arc::clone(&self.dirty);
        let (namespace, key, quiet) = (self.namespace, self.key, self.quiet);

        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            let snapshot = entries.lock().clone();
            // Dirty clears only after the write lands; an abort mid-write
            // leaves the change flagged for the next flush
            match write_document(store.as_ref(), namespace, key, &snapshot).await {
                Ok(()) => dirty.store(false, Ordering::SeqCst),
                Err(e) => warn!(key, "debounced settings write failed: {e}"),
            }
        }));
    }

    /// Write out any pending change immediately
    ///
    /// Cancels the debounce timer. No-op when nothing changed since the
    /// last write.
    pub async fn flush(&self) -> Result<()> {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
        if !self.dirty.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        let snapshot = self.entries.lock().clone();
        match write_document(self.store.as_ref(), self.namespace, self.key, &snapshot).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.dirty.store(true, Ordering::SeqCst);
                Err(e)
            }
        }
    }
}

impl<V> Drop for PersistedMap<V> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

async fn write_document<V: Serialize>(
    store: &dyn SettingsStore,
    namespace: &'static str,
    key: &'static str,
    snapshot: &HashMap<SkillId, V>,
) -> Result<()> {
    let value = serde_json::to_value(snapshot)
        .map_err(|e| RequestError::Persistence(format!("{key}: {e}")))?;
    store.set(namespace, key, value).await?;
    debug!(key, entries = snapshot.len(), "settings document written");
    Ok(())
}
