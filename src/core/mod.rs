pub mod error;
pub mod types;

pub use error::{RequestError, Result};
pub use types::{clamp_modifier, SkillId, MODIFIER_MAX, MODIFIER_MIN};
