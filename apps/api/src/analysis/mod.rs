// Founder archetype analysis pipeline.
// Implements: cast normalization, prompt composition, schema-constrained
// classification, response validation, and the /analyze-user orchestration.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod analyzer;
pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod validation;

#[cfg(test)]
pub mod testing;
