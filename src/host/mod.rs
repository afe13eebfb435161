//! Host collaborator boundary
//!
//! Everything the embedding virtual tabletop supplies - settings storage,
//! the chat log, user notifications, and the skill configuration sources -
//! is consumed through the traits defined here. The crate never talks to
//! the host directly.

pub mod memory;
pub mod traits;

pub use memory::{
    MemorySettings, NoticeLevel, RecordingChat, RecordingNotifier, StaticSkillSource,
};
pub use traits::{
    ChatSink, CompendiumEntry, ConfigEntry, Notifier, SettingsStore, SkillSource,
};
