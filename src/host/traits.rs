//! Collaborator traits for host-supplied services

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::Result;
use crate::request::RequestMessage;

/// Key-value settings storage supplied by the host
///
/// Reads are synchronous lookups against the host's settings cache; writes
/// go through the host's persistence layer and may fail.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a settings document, `None` when the key was never written
    fn get(&self, namespace: &str, key: &str) -> Option<Value>;

    /// Persist a settings document
    async fn set(&self, namespace: &str, key: &str, value: Value) -> Result<()>;
}

/// Chat log accepting formatted request messages
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Post a message to all session participants
    async fn post(&self, message: RequestMessage) -> Result<()>;
}

/// Fire-and-forget user notifications
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// A keyed skill entry from the host's system configuration
#[derive(Debug, Clone)]
pub struct ConfigEntry {
    /// Host-native key, also used as the skill id
    pub key: String,
    /// Localized display label
    pub label: String,
}

/// A skill document from the host's compendium collection
#[derive(Debug, Clone)]
pub struct CompendiumEntry {
    /// Host-native document id, if the document carries one
    pub id: Option<String>,
    pub name: String,
    /// Document type tag; only `skill` and `talent` entries are kept
    pub kind: String,
}

/// Read-only skill definition sources supplied by the host
#[async_trait]
pub trait SkillSource: Send + Sync {
    /// Identifier of the game system the host is running
    fn system_id(&self) -> &str;

    /// Skill entries from the system configuration lookup
    fn system_entries(&self) -> Result<Vec<ConfigEntry>>;

    /// Skill documents from the compendium collection
    async fn compendium_entries(&self) -> Result<Vec<CompendiumEntry>>;
}
