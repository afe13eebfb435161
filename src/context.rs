//! Engine context and lifecycle
//!
//! `RequestCheck` owns the catalog, the persisted stores, and the chat
//! dispatcher, wired to the host collaborators handed in at construction.
//! Create it at module startup, call `initialize`, and `shutdown` before
//! the host unloads the module - shutdown flushes pending settings writes
//! that the debounce timer has not persisted yet.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::SkillCatalog;
use crate::core::error::{RequestError, Result};
use crate::core::types::SkillId;
use crate::host::traits::{ChatSink, Notifier, SettingsStore, SkillSource};
use crate::panel::{panel_data, PanelController, PanelData, PanelState, PanelSurface, ToggleOutcome};
use crate::request::{RequestDispatcher, SkillRequest, ZeroModifierStyle};
use crate::settings::persisted::PERSIST_QUIET;
use crate::settings::registry::ModuleSettings;
use crate::settings::stores::{ModifierStore, VisibilityStore};
use crate::settings::transfer::{export_settings, import_settings, SettingsExport};

/// The collaborators the host supplies
pub struct HostAdapters {
    pub settings: Arc<dyn SettingsStore>,
    pub chat: Arc<dyn ChatSink>,
    pub notifier: Arc<dyn Notifier>,
    pub source: Arc<dyn SkillSource>,
}

/// Static engine configuration
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    /// Game system this module supports; `initialize` fails on a mismatch
    pub expected_system: String,
    /// Speaker alias stamped onto chat messages
    pub speaker_alias: String,
    /// Zero-modifier rendering in batch lists
    pub zero_modifier_style: ZeroModifierStyle,
    /// Quiet period for debounced settings writes
    pub persist_quiet: Duration,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            expected_system: "dsa5".to_string(),
            speaker_alias: "GM".to_string(),
            zero_modifier_style: ZeroModifierStyle::default(),
            persist_quiet: PERSIST_QUIET,
        }
    }
}

/// The assembled engine
pub struct RequestCheck {
    config: ModuleConfig,
    notifier: Arc<dyn Notifier>,
    source: Arc<dyn SkillSource>,
    settings: ModuleSettings,
    catalog: SkillCatalog,
    modifiers: ModifierStore,
    visibility: VisibilityStore,
    dispatcher: RequestDispatcher,
    panel: PanelController,
    panel_state: PanelState,
}

impl RequestCheck {
    pub fn new(adapters: HostAdapters, config: ModuleConfig) -> Self {
        let settings = ModuleSettings::new(adapters.settings.clone());
        let modifiers = ModifierStore::with_quiet(adapters.settings.clone(), config.persist_quiet);
        let visibility =
            VisibilityStore::with_quiet(adapters.settings.clone(), config.persist_quiet);
        let dispatcher = RequestDispatcher::new(
            adapters.chat,
            adapters.notifier.clone(),
            config.speaker_alias.clone(),
            config.zero_modifier_style,
        );

        Self {
            config,
            notifier: adapters.notifier,
            source: adapters.source,
            settings,
            catalog: SkillCatalog::empty(),
            modifiers,
            visibility,
            dispatcher,
            panel: PanelController::new(),
            panel_state: PanelState::new(),
        }
    }

    /// Verify the host system, load persisted state, and build the catalog
    pub async fn initialize(&mut self) -> Result<()> {
        let found = self.source.system_id();
        if found != self.config.expected_system {
            self.notifier.error(&format!(
                "Request check supports only the {} system",
                self.config.expected_system
            ));
            return Err(RequestError::HostMismatch {
                expected: self.config.expected_system.clone(),
                found: found.to_string(),
            });
        }

        self.modifiers.load();
        self.visibility.load();
        self.visibility.set_default(self.settings.default_visible());
        self.catalog = SkillCatalog::load(self.source.as_ref()).await;

        if self.settings.debug_mode() {
            debug!("debug mode enabled in module settings");
        }
        info!(skills = self.catalog.len(), "request check initialized");
        Ok(())
    }

    /// Rebuild the catalog wholesale from the host sources
    pub async fn reload_catalog(&mut self) {
        self.catalog = SkillCatalog::load(self.source.as_ref()).await;
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn modifiers(&self) -> &ModifierStore {
        &self.modifiers
    }

    pub fn visibility(&self) -> &VisibilityStore {
        &self.visibility
    }

    pub fn settings(&self) -> &ModuleSettings {
        &self.settings
    }

    pub fn panel_state(&self) -> &PanelState {
        &self.panel_state
    }

    pub fn panel_state_mut(&mut self) -> &mut PanelState {
        &mut self.panel_state
    }

    /// Render data for the host's panel adapter
    pub fn panel_data(&self) -> PanelData {
        panel_data(
            &self.panel_state,
            &self.catalog,
            &self.modifiers,
            &self.visibility,
        )
    }

    /// Toggle the panel on the given surface
    pub async fn toggle_panel(&self, surface: &dyn PanelSurface) -> Result<ToggleOutcome> {
        let data = self.panel_data();
        match self.panel.toggle(surface, data).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.notifier.error("Opening the request panel failed");
                Err(e)
            }
        }
    }

    /// Post a request for a cataloged skill with its stored modifier
    pub async fn send_request_for(&self, id: &SkillId) -> Result<()> {
        let skill = self.catalog.by_id(id).ok_or_else(|| {
            self.notifier.error("Unknown skill");
            RequestError::InvalidInput(format!("unknown skill id: {id}"))
        })?;
        self.dispatcher
            .send_request(&skill.name, self.modifiers.get(id))
            .await
    }

    /// Post a free-form request
    pub async fn send_request(&self, skill_name: &str, modifier: i32) -> Result<()> {
        self.dispatcher.send_request(skill_name, modifier).await
    }

    /// Post a batch of requests as one message
    pub async fn send_batch(&self, requests: &[SkillRequest]) -> Result<()> {
        self.dispatcher.send_batch(requests).await
    }

    /// Export all persisted settings as a portable snapshot
    pub fn export_settings(&self) -> SettingsExport {
        export_settings(&self.settings, &self.modifiers, &self.visibility)
    }

    /// Import a settings snapshot, writing through immediately
    pub async fn import_settings(&self, export: &SettingsExport) -> Result<()> {
        import_settings(
            export,
            &self.settings,
            &self.modifiers,
            &self.visibility,
            self.notifier.as_ref(),
        )
        .await
    }

    /// Flush pending settings writes and close the panel
    ///
    /// Pending debounced writes are flushed, not dropped - closing the
    /// module must not lose the last burst of adjustments.
    pub async fn shutdown(&self, surface: Option<&dyn PanelSurface>) -> Result<()> {
        if let Some(surface) = surface {
            self.panel.close(surface).await?;
        }
        self.modifiers.flush().await?;
        self.visibility.flush().await?;
        info!("request check shut down");
        Ok(())
    }
}
