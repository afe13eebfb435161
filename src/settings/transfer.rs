//! Settings export and import
//!
//! Lets a game master move modifier and visibility configuration between
//! worlds. Imports write through immediately rather than waiting on the
//! debounce timer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::core::error::Result;
use crate::core::types::{now_ms, SkillId};
use crate::host::traits::Notifier;
use crate::settings::registry::ModuleSettings;
use crate::settings::stores::{ModifierStore, VisibilityStore};

/// Module version stamped into exports
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A portable snapshot of all module settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsExport {
    pub version: String,
    pub visibility: HashMap<SkillId, bool>,
    pub modifiers: HashMap<SkillId, i32>,
    pub debug_mode: bool,
    pub default_visible: bool,
    pub export_date_ms: u64,
}

/// Capture the current settings as a portable snapshot
pub fn export_settings(
    settings: &ModuleSettings,
    modifiers: &ModifierStore,
    visibility: &VisibilityStore,
) -> SettingsExport {
    SettingsExport {
        version: MODULE_VERSION.to_string(),
        visibility: visibility.snapshot(),
        modifiers: modifiers.snapshot(),
        debug_mode: settings.debug_mode(),
        default_visible: settings.default_visible(),
        export_date_ms: now_ms(),
    }
}

/// Apply a snapshot, replacing the persisted documents
///
/// A version mismatch is reported as a warning but does not block the
/// import; modifier values are clamped on the way in.
pub async fn import_settings(
    export: &SettingsExport,
    settings: &ModuleSettings,
    modifiers: &ModifierStore,
    visibility: &VisibilityStore,
    notifier: &dyn Notifier,
) -> Result<()> {
    if export.version != MODULE_VERSION {
        notifier.warn(&format!(
            "Importing settings from version {}, current version is {}",
            export.version, MODULE_VERSION
        ));
    }

    visibility.replace(export.visibility.clone());
    modifiers.replace(export.modifiers.clone());
    visibility.flush().await?;
    modifiers.flush().await?;
    settings.set_debug_mode(export.debug_mode).await?;
    settings.set_default_visible(export.default_visible).await?;

    info!(
        skills = export.modifiers.len(),
        "settings import applied"
    );
    notifier.info("Settings imported");
    Ok(())
}
