//! Render data for the panel
//!
//! `panel_data` is a pure function of engine state; it owns no host
//! resources and can be called as often as the UI re-renders.

use crate::catalog::SkillCatalog;
use crate::core::types::SkillId;
use crate::panel::state::PanelState;
use crate::settings::stores::{ModifierStore, VisibilityStore};

/// A visible skill row: name plus its current modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    pub id: SkillId,
    pub name: String,
    pub modifier: i32,
}

/// A configuration row: every skill with its visibility bit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRow {
    pub id: SkillId,
    pub name: String,
    pub visible: bool,
}

/// Everything the UI adapter needs to draw the panel
#[derive(Debug, Clone, Default)]
pub struct PanelData {
    pub collapsed: bool,
    pub show_config: bool,
    /// Visible skills for the active-use list
    pub skills: Vec<SkillRow>,
    /// All skills for the configuration tab
    pub all_skills: Vec<ConfigRow>,
}

/// Compute the panel's render data from the current engine state
pub fn panel_data(
    state: &PanelState,
    catalog: &SkillCatalog,
    modifiers: &ModifierStore,
    visibility: &VisibilityStore,
) -> PanelData {
    let skills = catalog
        .visible(visibility)
        .into_iter()
        .map(|skill| SkillRow {
            id: skill.id.clone(),
            name: skill.name.clone(),
            modifier: modifiers.get(&skill.id),
        })
        .collect();

    let all_skills = catalog
        .all()
        .iter()
        .map(|skill| ConfigRow {
            id: skill.id.clone(),
            name: skill.name.clone(),
            visible: visibility.is_visible(&skill.id),
        })
        .collect();

    PanelData {
        collapsed: state.collapsed,
        show_config: state.show_config,
        skills,
        all_skills,
    }
}
