//! Answer extraction from echo-back completions.
//!
//! Local models called with echo enabled return the whole prompt followed by
//! the generated continuation. The prompt skeleton places the cutoff marker
//! twice (after the example block, after the real user block), so the answer
//! is everything after the second occurrence. Anything else is model or
//! template drift and fails loudly instead of producing empty records.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use triage_abi::UsageCounters;

use crate::errors::ExtractError;
use crate::prompt::PromptSpec;

/// Model EOS sentinel stripped from answer tails even when a spec's stop
/// list doesn't carry it.
const EOS: &str = "</s>";

/// The structured payload the model is instructed to emit: exactly these two
/// keys, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerPayload {
    #[serde(rename = "CATEGORY")]
    pub category: String,
    #[serde(rename = "SUB-CATEGORY")]
    pub subcategories: Vec<String>,
}

/// One classified message, ready for the run log.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    /// The original (possibly truncated) user message.
    pub message: String,
    pub category: String,
    pub subcategories: Vec<String>,
    /// Pass-through from the backend, unchanged.
    pub usage: UsageCounters,
    /// Wall-clock time of the model call, unchanged.
    pub duration: Duration,
}

impl ParsedResponse {
    pub fn from_parts<M: Into<String>>(
        message: M,
        payload: AnswerPayload,
        usage: UsageCounters,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            category: payload.category,
            subcategories: payload.subcategories,
            usage,
            duration,
        }
    }
}

/// Isolate and parse the generated answer in `raw_text`.
///
/// `spec_id` only feeds error context and debug output.
pub fn extract(
    raw_text: &str,
    cutoff: &str,
    stop_markers: &[String],
    spec_id: &str,
) -> Result<AnswerPayload, ExtractError> {
    let span = answer_span(raw_text, cutoff).map_err(|found| ExtractError::MalformedEcho {
        spec_id: spec_id.to_string(),
        cutoff: cutoff.to_string(),
        found,
        raw: raw_text.to_string(),
    })?;

    let span = strip_sentinels(span, stop_markers);
    tracing::debug!(spec_id, filtered = span, "isolated answer span");

    serde_json::from_str(span).map_err(|source| ExtractError::UnparsablePayload {
        spec_id: spec_id.to_string(),
        span: span.to_string(),
        source,
    })
}

impl PromptSpec {
    /// [`extract`] with this spec's cutoff, stop list and id.
    pub fn extract(&self, raw_text: &str) -> Result<AnswerPayload, ExtractError> {
        extract(raw_text, self.cutoff(), self.stops(), self.id())
    }
}

/// Everything after the second `cutoff` occurrence, or the number of
/// occurrences actually found (0 or 1).
fn answer_span<'a>(raw: &'a str, cutoff: &str) -> Result<&'a str, usize> {
    let first = raw.find(cutoff).ok_or(0usize)?;
    let after_first = first + cutoff.len();
    match raw[after_first..].find(cutoff) {
        Some(offset) => Ok(&raw[after_first + offset + cutoff.len()..]),
        None => Err(1),
    }
}

/// Trim the span and peel stop/EOS sentinels off the tail until none remain.
/// Tail-only on purpose: the payload itself may contain marker-like text.
fn strip_sentinels<'a>(span: &'a str, stop_markers: &[String]) -> &'a str {
    let mut s = span.trim();
    loop {
        let mut changed = false;
        for marker in stop_markers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(EOS))
        {
            if marker.is_empty() {
                continue;
            }
            while let Some(rest) = s.strip_suffix(marker) {
                s = rest.trim_end();
                changed = true;
            }
        }
        if !changed {
            return s.trim();
        }
    }
}
