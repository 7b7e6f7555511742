//! Token estimation and context-level selection
//!
//! The estimator is a fixed character heuristic, not a real tokenizer.
//! Downstream budget decisions depend on it being deterministic and cheap,
//! so it must stay exactly `chars / 4` with floor division.

use crate::config::ScanConfig;
use crate::extract::Extraction;
use crate::model::ContextLevel;

/// Approximate token count of a text: four characters per token, floored
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4
}

/// Outcome of context-level selection for one file
#[derive(Debug, Clone)]
pub struct ContextSelection {
    pub context_level: ContextLevel,
    pub full_text: Option<String>,
    pub token_estimate: usize,
}

/// Decide whether a record carries full text or signatures only.
///
/// Three branches, all intentional:
/// 1. above `context_threshold`: signatures only;
/// 2. at or under `max_full_size`: full text;
/// 3. between the two (reachable only when `max_full_size` is below
///    `context_threshold`): signatures only.
///
/// The thresholds are tuned independently, which is why the middle branch
/// exists even though the default configuration never reaches it.
#[must_use]
pub fn select_context(
    line_count: usize,
    text: String,
    extraction: &Extraction,
    config: &ScanConfig,
) -> ContextSelection {
    if line_count > config.context_threshold {
        ContextSelection {
            context_level: ContextLevel::Signatures,
            full_text: None,
            token_estimate: signature_token_estimate(extraction),
        }
    } else if line_count <= config.max_full_size {
        let token_estimate = estimate_tokens(&text);
        ContextSelection {
            context_level: ContextLevel::Full,
            full_text: Some(text),
            token_estimate,
        }
    } else {
        ContextSelection {
            context_level: ContextLevel::Signatures,
            full_text: None,
            token_estimate: signature_token_estimate(extraction),
        }
    }
}

/// Token cost of a signatures-only record: the joined extraction lists
fn signature_token_estimate(extraction: &Extraction) -> usize {
    let joined: Vec<&str> = extraction
        .signatures
        .iter()
        .chain(&extraction.type_summaries)
        .chain(&extraction.references)
        .map(String::as_str)
        .collect();
    estimate_tokens(&joined.join("\n"))
}

#[cfg(test)]
mod tests;
