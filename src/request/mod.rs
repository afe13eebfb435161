//! Skill request construction, formatting, and chat dispatch

pub mod format;
pub mod handler;
pub mod validate;

pub use format::{
    escape_html, format_batch, format_single, signed_modifier, BatchOutcome, ZeroModifierStyle,
    MAX_BATCH_REQUESTS,
};
pub use handler::{RequestDispatcher, RequestFlags, RequestMessage};
pub use validate::{validate, MAX_NAME_CHARS};

use serde::{Deserialize, Serialize};

use crate::core::error::{RequestError, Result};

/// An ephemeral dice-request: a skill name plus a modifier
///
/// Constructed per chat action and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequest {
    pub skill_name: String,
    pub modifier: i32,
}

impl SkillRequest {
    /// Build a validated request
    pub fn new(skill_name: impl Into<String>, modifier: i32) -> Result<Self> {
        let skill_name = skill_name.into();
        if !validate(&skill_name, modifier) {
            return Err(RequestError::InvalidInput(format!(
                "rejected skill request for {skill_name:?}"
            )));
        }
        Ok(Self {
            skill_name,
            modifier,
        })
    }

    /// Build without validation, for collecting possibly-bad user input
    /// that `format_batch` filters later
    pub fn unchecked(skill_name: impl Into<String>, modifier: i32) -> Self {
        Self {
            skill_name: skill_name.into(),
            modifier,
        }
    }

    pub fn is_valid(&self) -> bool {
        validate(&self.skill_name, self.modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(SkillRequest::new("Klettern", 3).is_ok());
        assert!(SkillRequest::new("", 3).is_err());
        assert!(SkillRequest::new("Klettern", 11).is_err());
    }

    #[test]
    fn test_unchecked_defers_validation() {
        let request = SkillRequest::unchecked("", 99);
        assert!(!request.is_valid());
    }
}
