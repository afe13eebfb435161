//! Skill catalog
//!
//! Loads the session's skill list from the host, preferring the system
//! configuration, then the compendium, then the built-in fallback talents.
//! The catalog is an immutable snapshot; reloading rebuilds it wholesale.

pub mod definitions;
pub mod ident;

pub use definitions::{FallbackTalent, TalentGroup, FALLBACK_TALENTS};
pub use ident::{collation_key, sanitize_id};

use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::core::types::SkillId;
use crate::host::traits::SkillSource;
use crate::settings::stores::VisibilityStore;

/// Which source a skill was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillOrigin {
    System,
    Compendium,
    Fallback,
}

/// A named character capability that can be the subject of a dice request
#[derive(Debug, Clone)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub origin: SkillOrigin,
}

/// Configuration keys that are not skills and must never reach the panel
pub const EXCLUDED_KEY_PATTERNS: &[&str] = &[
    "race",
    "combat",
    "currency",
    "meleeweapon",
    "rangeweapon",
    "kampftechnik",
    "währung",
    "rasse",
];

fn is_excluded_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    EXCLUDED_KEY_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Immutable snapshot of the skills known to the current session
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn empty() -> Self {
        Self { skills: Vec::new() }
    }

    /// Load the catalog from the host source chain
    ///
    /// Source failures are logged and treated as empty results; the fallback
    /// list guarantees this never fails.
    pub async fn load(source: &dyn SkillSource) -> Self {
        let mut skills = Self::from_system(source);

        if skills.is_empty() {
            skills = Self::from_compendium(source).await;
        }

        if skills.is_empty() {
            info!("no host skills available, using fallback talents");
            skills = Self::from_fallback();
        }

        let mut catalog = Self { skills };
        catalog.dedup();
        catalog.sort();
        info!(count = catalog.len(), "skill catalog loaded");
        catalog
    }

    fn from_system(source: &dyn SkillSource) -> Vec<Skill> {
        let entries = match source.system_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("system skill lookup failed: {e}");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter(|entry| !is_excluded_key(&entry.key))
            .map(|entry| Skill {
                id: SkillId::new(entry.key),
                name: entry.label,
                origin: SkillOrigin::System,
            })
            .collect()
    }

    async fn from_compendium(source: &dyn SkillSource) -> Vec<Skill> {
        let entries = match source.compendium_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("compendium lookup failed: {e}");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter(|entry| entry.kind == "skill" || entry.kind == "talent")
            .map(|entry| {
                let id = entry
                    .id
                    .map(SkillId::new)
                    .unwrap_or_else(|| sanitize_id(&entry.name));
                Skill {
                    id,
                    name: entry.name,
                    origin: SkillOrigin::Compendium,
                }
            })
            .collect()
    }

    fn from_fallback() -> Vec<Skill> {
        FALLBACK_TALENTS
            .iter()
            .map(|talent| Skill {
                id: sanitize_id(talent.name),
                name: talent.name.to_string(),
                origin: SkillOrigin::Fallback,
            })
            .collect()
    }

    /// Drop later duplicates so ids stay unique within the snapshot
    fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.skills.retain(|skill| {
            let fresh = seen.insert(skill.id.clone());
            if !fresh {
                debug!(id = %skill.id, "dropping duplicate skill id");
            }
            fresh
        });
    }

    fn sort(&mut self) {
        self.skills
            .sort_by_cached_key(|skill| (collation_key(&skill.name), skill.name.clone()));
    }

    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills currently visible in the active-use list
    ///
    /// Stale visibility entries for ids outside this snapshot are ignored.
    pub fn visible(&self, visibility: &VisibilityStore) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| visibility.is_visible(&skill.id))
            .collect()
    }

    pub fn by_id(&self, id: &SkillId) -> Option<&Skill> {
        self.skills.iter().find(|skill| &skill.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }
}
