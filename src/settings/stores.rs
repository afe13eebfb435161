//! Typed stores over the persisted documents
//!
//! `ModifierStore` and `VisibilityStore` are thin wrappers around one
//! shared `PersistedMap` implementation; only defaults and clamping differ.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::error::Result;
use crate::core::types::{clamp_modifier, SkillId};
use crate::host::traits::SettingsStore;
use crate::settings::persisted::{PersistedMap, PERSIST_QUIET};
use crate::settings::registry::{NAMESPACE, SKILL_MODIFIERS_KEY, SKILL_VISIBILITY_KEY};

/// Per-skill integer modifiers, clamped to the valid range
pub struct ModifierStore {
    map: PersistedMap<i32>,
}

impl ModifierStore {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self::with_quiet(store, PERSIST_QUIET)
    }

    pub fn with_quiet(store: Arc<dyn SettingsStore>, quiet: Duration) -> Self {
        Self {
            map: PersistedMap::new(NAMESPACE, SKILL_MODIFIERS_KEY, store, quiet),
        }
    }

    /// Read the persisted document, clamping anything out of range
    pub fn load(&self) {
        self.map.load();
        let snapshot = self.map.snapshot();
        if snapshot.values().any(|&v| v != clamp_modifier(v)) {
            self.map.replace(
                snapshot
                    .into_iter()
                    .map(|(id, v)| (id, clamp_modifier(v)))
                    .collect(),
            );
        }
    }

    /// Current modifier for a skill, 0 when never adjusted
    pub fn get(&self, id: &SkillId) -> i32 {
        self.map.get(id).unwrap_or(0)
    }

    /// Apply a delta, clamp, store, and return the new value
    pub fn adjust(&self, id: &SkillId, delta: i32) -> i32 {
        let current = self.get(id);
        let next = clamp_modifier(current.saturating_add(delta));
        if next != current {
            self.map.insert(id.clone(), next);
        }
        next
    }

    /// Set a modifier directly, clamped
    pub fn set(&self, id: &SkillId, value: i32) -> i32 {
        let next = clamp_modifier(value);
        if next != self.get(id) {
            self.map.insert(id.clone(), next);
        }
        next
    }

    /// Clear all modifiers
    pub fn reset(&self) {
        self.map.reset();
    }

    pub fn snapshot(&self) -> HashMap<SkillId, i32> {
        self.map.snapshot()
    }

    /// Swap in a full document (settings import), clamping each value
    pub fn replace(&self, entries: HashMap<SkillId, i32>) {
        self.map.replace(
            entries
                .into_iter()
                .map(|(id, v)| (id, clamp_modifier(v)))
                .collect(),
        );
    }

    pub async fn flush(&self) -> Result<()> {
        self.map.flush().await
    }

    pub fn is_dirty(&self) -> bool {
        self.map.is_dirty()
    }
}

/// Per-skill visibility flags controlling the active-use list
pub struct VisibilityStore {
    map: PersistedMap<bool>,
    default_visible: bool,
}

impl VisibilityStore {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self::with_quiet(store, PERSIST_QUIET)
    }

    pub fn with_quiet(store: Arc<dyn SettingsStore>, quiet: Duration) -> Self {
        Self {
            map: PersistedMap::new(NAMESPACE, SKILL_VISIBILITY_KEY, store, quiet),
            default_visible: true,
        }
    }

    /// Visibility applied to skills with no explicit entry
    pub fn set_default(&mut self, default_visible: bool) {
        self.default_visible = default_visible;
    }

    pub fn load(&self) {
        self.map.load();
    }

    pub fn is_visible(&self, id: &SkillId) -> bool {
        self.map.get(id).unwrap_or(self.default_visible)
    }

    pub fn set_visible(&self, id: &SkillId, visible: bool) {
        self.map.insert(id.clone(), visible);
    }

    /// Clear all visibility overrides
    pub fn reset(&self) {
        self.map.reset();
    }

    pub fn snapshot(&self) -> HashMap<SkillId, bool> {
        self.map.snapshot()
    }

    /// Swap in a full document (settings import)
    pub fn replace(&self, entries: HashMap<SkillId, bool>) {
        self.map.replace(entries);
    }

    pub async fn flush(&self) -> Result<()> {
        self.map.flush().await
    }

    pub fn is_dirty(&self) -> bool {
        self.map.is_dirty()
    }
}
