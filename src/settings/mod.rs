//! Persisted module settings
//!
//! Per-skill modifier and visibility maps ride on one debounced
//! `PersistedMap`; scalar settings (debug mode, audio feedback, default
//! visibility) are read through `ModuleSettings` with registered defaults.

pub mod persisted;
pub mod registry;
pub mod stores;
pub mod transfer;

pub use persisted::{PersistedMap, PERSIST_QUIET};
pub use registry::{
    ModuleSettings, DEBUG_MODE_KEY, DEFAULT_VISIBLE_KEY, ENABLE_AUDIO_KEY, NAMESPACE,
    SKILL_MODIFIERS_KEY, SKILL_VISIBILITY_KEY,
};
pub use stores::{ModifierStore, VisibilityStore};
pub use transfer::{export_settings, import_settings, SettingsExport};
