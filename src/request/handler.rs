//! Chat dispatch for skill requests
//!
//! Wraps formatted tokens in the host's inline-roll macro form and posts
//! them with speaker metadata and structured flags, so client-side handlers
//! can reconstruct the request without parsing the content.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{RequestError, Result};
use crate::core::types::now_ms;
use crate::host::traits::{ChatSink, Notifier};
use crate::request::format::{
    escape_html, format_batch, format_single, ZeroModifierStyle, MAX_BATCH_REQUESTS,
};
use crate::request::{validate, SkillRequest};

/// Structured message flags carried alongside the rendered content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestFlags {
    Single {
        skill: String,
        modifier: i32,
        timestamp_ms: u64,
    },
    Batch {
        requests: Vec<SkillRequest>,
        timestamp_ms: u64,
    },
}

/// A formatted request message bound for the chat log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMessage {
    pub content: String,
    /// Speaker alias shown to session participants
    pub speaker: String,
    pub flags: RequestFlags,
}

fn macro_token(entry: &str) -> String {
    format!("@Rq[{entry}]")
}

/// Builds and posts request messages
pub struct RequestDispatcher {
    chat: Arc<dyn ChatSink>,
    notifier: Arc<dyn Notifier>,
    speaker: String,
    zero_style: ZeroModifierStyle,
}

impl RequestDispatcher {
    pub fn new(
        chat: Arc<dyn ChatSink>,
        notifier: Arc<dyn Notifier>,
        speaker: impl Into<String>,
        zero_style: ZeroModifierStyle,
    ) -> Self {
        Self {
            chat,
            notifier,
            speaker: speaker.into(),
            zero_style,
        }
    }

    /// Post a single skill request
    ///
    /// Validation failures abort the operation and notify the user.
    pub async fn send_request(&self, skill_name: &str, modifier: i32) -> Result<()> {
        if !validate(skill_name, modifier) {
            self.notifier.error("Invalid skill request");
            return Err(RequestError::InvalidInput(format!(
                "rejected skill request for {skill_name:?}"
            )));
        }

        debug!(skill = skill_name, modifier, "sending skill request");
        let escaped = escape_html(skill_name);
        let message = RequestMessage {
            content: macro_token(&format_single(skill_name, modifier)),
            speaker: self.speaker.clone(),
            flags: RequestFlags::Single {
                skill: escaped,
                modifier,
                timestamp_ms: now_ms(),
            },
        };
        self.post(message).await
    }

    /// Post a batch of skill requests as one message
    ///
    /// Invalid entries are dropped silently; truncation past the cap is
    /// surfaced as a warning. Zero valid entries aborts with an error.
    pub async fn send_batch(&self, requests: &[SkillRequest]) -> Result<()> {
        if requests.is_empty() {
            self.notifier.warn("No skills selected");
            return Err(RequestError::InvalidInput("empty request batch".into()));
        }

        let outcome = match format_batch(requests, self.zero_style) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.notifier.error("Invalid skill request");
                return Err(e);
            }
        };

        if outcome.truncated > 0 {
            self.notifier.warn(&format!(
                "Only {MAX_BATCH_REQUESTS} requests per message, dropped {}",
                outcome.truncated
            ));
        }

        debug!(
            accepted = outcome.accepted.len(),
            dropped_invalid = outcome.dropped_invalid,
            truncated = outcome.truncated,
            "sending batch request"
        );

        let content = outcome
            .entries
            .iter()
            .map(|entry| macro_token(entry))
            .collect::<Vec<_>>()
            .join("\n");
        let message = RequestMessage {
            content,
            speaker: self.speaker.clone(),
            flags: RequestFlags::Batch {
                requests: outcome.accepted,
                timestamp_ms: now_ms(),
            },
        };
        self.post(message).await
    }

    async fn post(&self, message: RequestMessage) -> Result<()> {
        match self.chat.post(message).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.notifier.error("Sending the chat message failed");
                Err(e)
            }
        }
    }
}
