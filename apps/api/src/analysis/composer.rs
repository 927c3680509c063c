//! Prompt Composer — normalizes cast input shapes, tallies mentions, and
//! assembles the prompt text + output schema for one classification call.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, SYSTEM_PROMPT};
use crate::analysis::schema::classification_schema;
use crate::errors::AppError;
use crate::models::farcaster::{Cast, Profile};

/// Matches @-style mentions: `@` followed by one or more word characters.
static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)").expect("mention pattern is valid"));

/// The accepted cast input shapes, matched exhaustively.
///
/// Callers may hand the composer a bare list of casts, a single cast, or a
/// wrapper object holding a cast list; all normalize to a flat list. Any
/// other shape fails deserialization and surfaces as `InvalidInput`.
///
/// Variant order matters for untagged matching: a list is tried first, then
/// the wrapper (whose object lacks a `text` field), then a single cast.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CastInput {
    Many(Vec<Cast>),
    Wrapper { casts: Vec<Cast> },
    One(Cast),
}

impl CastInput {
    /// Parses an arbitrary JSON value into one of the accepted shapes.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        serde_json::from_value(value)
            .map_err(|e| AppError::InvalidInput(format!("unrecognized cast input shape: {e}")))
    }

    /// Flattens any accepted shape to the canonical cast list.
    pub fn normalize(self) -> Vec<Cast> {
        match self {
            CastInput::Many(casts) => casts,
            CastInput::Wrapper { casts } => casts,
            CastInput::One(cast) => vec![cast],
        }
    }
}

/// Prompt text and output schema for one classification call.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub text: String,
    pub schema: Value,
    /// Number of casts actually embedded in the prompt.
    pub cast_count: usize,
}

/// Tallies mention frequency per mentioned handle across the cast batch.
///
/// BTreeMap keeps the prompt section deterministic for identical input.
pub fn mention_tally(casts: &[Cast]) -> BTreeMap<String, u32> {
    let mut tally = BTreeMap::new();
    for cast in casts {
        for capture in MENTION_PATTERN.captures_iter(&cast.text) {
            *tally.entry(capture[1].to_string()).or_insert(0) += 1;
        }
    }
    tally
}

/// Builds the prompt text and output schema for a cast batch.
///
/// Fails with `NoContent` if the normalized batch is empty — an empty batch
/// must never reach the model.
pub fn compose(input: CastInput, profile: &Profile) -> Result<ComposedPrompt, AppError> {
    let casts = input.normalize();
    if casts.is_empty() {
        return Err(AppError::NoContent("No casts found for user".to_string()));
    }

    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("profile serialization: {e}")))?;

    let tally = mention_tally(&casts);
    let mentions_section = if tally.is_empty() {
        String::new()
    } else {
        let handles = tally
            .iter()
            .map(|(handle, count)| format!("@{handle} ({count})"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("\n- Frequently Mentioned Users: {handles}")
    };

    let content_sample = casts
        .iter()
        .map(|cast| cast.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let text = ANALYSIS_PROMPT_TEMPLATE
        .replace("{system_prompt}", SYSTEM_PROMPT)
        .replace("{profile_json}", &profile_json)
        .replace("{cast_count}", &casts.len().to_string())
        .replace("{mentions_section}", &mentions_section)
        .replace("{content_sample}", &content_sample);

    Ok(ComposedPrompt {
        text,
        schema: classification_schema(),
        cast_count: casts.len(),
    })
}
