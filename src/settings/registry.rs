//! Settings namespace, keys, and scalar accessors
//!
//! Scalar settings carry their defaults at the read site, so a host that
//! never persisted them still gets sensible values.

use std::sync::Arc;

use crate::core::error::Result;
use crate::host::traits::SettingsStore;

/// Namespace all module settings live under
pub const NAMESPACE: &str = "request-check";

/// Per-skill visibility document
pub const SKILL_VISIBILITY_KEY: &str = "skillVisibility";
/// Per-skill modifier document
pub const SKILL_MODIFIERS_KEY: &str = "skillModifiers";
/// Verbose diagnostics toggle
pub const DEBUG_MODE_KEY: &str = "debugMode";
/// Host may play a sound when a request is posted
pub const ENABLE_AUDIO_KEY: &str = "enableAudio";
/// Visibility applied to skills without an explicit entry
pub const DEFAULT_VISIBLE_KEY: &str = "defaultVisible";

/// Typed access to the scalar module settings
pub struct ModuleSettings {
    store: Arc<dyn SettingsStore>,
}

impl ModuleSettings {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.store
            .get(NAMESPACE, key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    pub fn debug_mode(&self) -> bool {
        self.get_bool(DEBUG_MODE_KEY, false)
    }

    pub async fn set_debug_mode(&self, enabled: bool) -> Result<()> {
        self.store
            .set(NAMESPACE, DEBUG_MODE_KEY, enabled.into())
            .await
    }

    pub fn audio_enabled(&self) -> bool {
        self.get_bool(ENABLE_AUDIO_KEY, true)
    }

    pub async fn set_audio_enabled(&self, enabled: bool) -> Result<()> {
        self.store
            .set(NAMESPACE, ENABLE_AUDIO_KEY, enabled.into())
            .await
    }

    pub fn default_visible(&self) -> bool {
        self.get_bool(DEFAULT_VISIBLE_KEY, true)
    }

    pub async fn set_default_visible(&self, visible: bool) -> Result<()> {
        self.store
            .set(NAMESPACE, DEFAULT_VISIBLE_KEY, visible.into())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::MemorySettings;

    #[tokio::test]
    async fn test_defaults_without_persisted_values() {
        let settings = ModuleSettings::new(Arc::new(MemorySettings::new()));
        assert!(!settings.debug_mode());
        assert!(settings.audio_enabled());
        assert!(settings.default_visible());
    }

    #[tokio::test]
    async fn test_set_and_read_back() {
        let settings = ModuleSettings::new(Arc::new(MemorySettings::new()));
        settings.set_debug_mode(true).await.unwrap();
        settings.set_audio_enabled(false).await.unwrap();
        settings.set_default_visible(false).await.unwrap();

        assert!(settings.debug_mode());
        assert!(!settings.audio_enabled());
        assert!(!settings.default_visible());
    }

    #[tokio::test]
    async fn test_wrong_type_falls_back_to_default() {
        let backing = Arc::new(MemorySettings::new());
        backing.seed(NAMESPACE, DEBUG_MODE_KEY, serde_json::json!("yes"));
        let settings = ModuleSettings::new(backing);
        assert!(!settings.debug_mode());
    }
}
