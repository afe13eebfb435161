//! In-memory collaborator implementations
//!
//! Used by the integration tests and by embedders that want to exercise the
//! engine without a live host. `MemorySettings` counts writes so tests can
//! assert on debounce coalescing; the chat and notifier doubles record what
//! was sent.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::core::error::{RequestError, Result};
use crate::host::traits::{
    ChatSink, CompendiumEntry, ConfigEntry, Notifier, SettingsStore, SkillSource,
};
use crate::request::RequestMessage;

/// Settings store backed by a process-local map
#[derive(Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<(String, String), Value>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make subsequent writes fail, for persistence-degradation tests
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a document directly, bypassing the write counter
    pub fn seed(&self, namespace: &str, key: &str, value: Value) {
        self.values
            .lock()
            .insert((namespace.to_string(), key.to_string()), value);
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    fn get(&self, namespace: &str, key: &str) -> Option<Value> {
        self.values
            .lock()
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
    }

    async fn set(&self, namespace: &str, key: &str, value: Value) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RequestError::Persistence(format!(
                "write rejected: {namespace}.{key}"
            )));
        }
        self.values
            .lock()
            .insert((namespace.to_string(), key.to_string()), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Chat sink that records every posted message
#[derive(Default)]
pub struct RecordingChat {
    messages: Mutex<Vec<RequestMessage>>,
    fail_posts: AtomicBool,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<RequestMessage> {
        self.messages.lock().clone()
    }

    pub fn set_fail_posts(&self, fail: bool) {
        self.fail_posts.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatSink for RecordingChat {
    async fn post(&self, message: RequestMessage) -> Result<()> {
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err(RequestError::ChatDelivery("chat sink offline".into()));
        }
        self.messages.lock().push(message);
        Ok(())
    }
}

/// Severity of a recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

/// Notifier that records every notification
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().clone()
    }

    fn with_level(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.with_level(NoticeLevel::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.with_level(NoticeLevel::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_level(NoticeLevel::Error)
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.notices
            .lock()
            .push((NoticeLevel::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.notices
            .lock()
            .push((NoticeLevel::Warn, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .push((NoticeLevel::Error, message.to_string()));
    }
}

/// Skill source serving fixed entry lists
pub struct StaticSkillSource {
    system_id: String,
    system: Vec<ConfigEntry>,
    compendium: Vec<CompendiumEntry>,
    fail_system: bool,
    fail_compendium: bool,
}

impl StaticSkillSource {
    pub fn new(system_id: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            system: Vec::new(),
            compendium: Vec::new(),
            fail_system: false,
            fail_compendium: false,
        }
    }

    pub fn with_system(mut self, entries: Vec<ConfigEntry>) -> Self {
        self.system = entries;
        self
    }

    pub fn with_compendium(mut self, entries: Vec<CompendiumEntry>) -> Self {
        self.compendium = entries;
        self
    }

    /// Make the system lookup fail, to exercise source fall-through
    pub fn failing_system(mut self) -> Self {
        self.fail_system = true;
        self
    }

    /// Make the compendium lookup fail, to exercise source fall-through
    pub fn failing_compendium(mut self) -> Self {
        self.fail_compendium = true;
        self
    }
}

#[async_trait]
impl SkillSource for StaticSkillSource {
    fn system_id(&self) -> &str {
        &self.system_id
    }

    fn system_entries(&self) -> Result<Vec<ConfigEntry>> {
        if self.fail_system {
            return Err(RequestError::SourceUnavailable(
                "system configuration not ready".into(),
            ));
        }
        Ok(self.system.clone())
    }

    async fn compendium_entries(&self) -> Result<Vec<CompendiumEntry>> {
        if self.fail_compendium {
            return Err(RequestError::SourceUnavailable(
                "compendium not ready".into(),
            ));
        }
        Ok(self.compendium.clone())
    }
}
