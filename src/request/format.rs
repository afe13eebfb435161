//! Request token formatting
//!
//! Produces the display tokens embedded in chat messages. Names are escaped
//! so they always render as literal text; modifiers carry an explicit sign.

use crate::core::error::{RequestError, Result};
use crate::request::SkillRequest;

/// Upper bound on requests in a single batch message
pub const MAX_BATCH_REQUESTS: usize = 10;

/// How a zero modifier is rendered in batch lists
///
/// The single-request path always prints `+0`; historically the batch list
/// dropped the suffix instead. `OmitSuffix` keeps that behavior, `AlwaysSigned`
/// aligns the batch list with the single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroModifierStyle {
    #[default]
    OmitSuffix,
    AlwaysSigned,
}

/// Escape text for literal rendering in markup-interpreting chat
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a modifier with an explicit sign: `+7`, `+0`, `-3`
pub fn signed_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// Format a single request token: escaped name plus signed modifier
pub fn format_single(name: &str, modifier: i32) -> String {
    format!("{} {}", escape_html(name), signed_modifier(modifier))
}

fn format_entry(request: &SkillRequest, style: ZeroModifierStyle) -> String {
    match style {
        ZeroModifierStyle::OmitSuffix if request.modifier == 0 => {
            escape_html(&request.skill_name)
        }
        _ => format_single(&request.skill_name, request.modifier),
    }
}

/// Result of formatting a batch of requests
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Formatted tokens, at most `MAX_BATCH_REQUESTS`
    pub entries: Vec<String>,
    /// The valid requests behind `entries`, for message flags
    pub accepted: Vec<SkillRequest>,
    /// Invalid requests dropped before the cap
    pub dropped_invalid: usize,
    /// Valid requests cut by the cap
    pub truncated: usize,
}

/// Format a batch of requests
///
/// Invalid entries are filtered out silently, then the first
/// `MAX_BATCH_REQUESTS` valid ones are kept; the outcome reports both
/// counts so the caller can surface a truncation warning. Zero valid
/// entries is an error and produces no message.
pub fn format_batch(requests: &[SkillRequest], style: ZeroModifierStyle) -> Result<BatchOutcome> {
    let valid: Vec<&SkillRequest> = requests.iter().filter(|r| r.is_valid()).collect();
    let dropped_invalid = requests.len() - valid.len();

    if valid.is_empty() {
        return Err(RequestError::InvalidInput(
            "no valid skill requests in batch".into(),
        ));
    }

    let truncated = valid.len().saturating_sub(MAX_BATCH_REQUESTS);
    let accepted: Vec<SkillRequest> = valid
        .into_iter()
        .take(MAX_BATCH_REQUESTS)
        .cloned()
        .collect();
    let entries = accepted.iter().map(|r| format_entry(r, style)).collect();

    Ok(BatchOutcome {
        entries,
        accepted,
        dropped_invalid,
        truncated,
    })
}
