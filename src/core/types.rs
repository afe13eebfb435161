//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Lower bound for skill modifiers
pub const MODIFIER_MIN: i32 = -10;

/// Upper bound for skill modifiers
pub const MODIFIER_MAX: i32 = 10;

/// Clamp a modifier into the valid range
pub fn clamp_modifier(value: i32) -> i32 {
    value.clamp(MODIFIER_MIN, MODIFIER_MAX)
}

/// Unique identifier for skills
///
/// Host-native on the system/compendium catalog paths, transliterated from
/// the display name on the fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SkillId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Wall clock in milliseconds since the Unix epoch, for chat message flags
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
