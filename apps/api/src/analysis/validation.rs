//! Response Validator — strict shape and range checks on the model payload.
//!
//! Schema-constrained decoding narrows what the model can emit, but the
//! schema is enforced provider-side and numeric bounds are advisory there.
//! Everything is re-checked here before the payload leaves the pipeline;
//! out-of-range values are rejected, never clamped.

use crate::errors::AppError;
use crate::models::analysis::ClassificationResult;

/// Parses and validates a raw model payload into a `ClassificationResult`.
///
/// Rejects with `Malformed` on: parse failure, an unknown `primaryType`
/// (the closed archetype enum fails deserialization), a missing field, or
/// any confidence/secondary score outside [0.0, 1.0].
pub fn validate(raw: &str) -> Result<ClassificationResult, AppError> {
    let result: ClassificationResult = serde_json::from_str(raw)
        .map_err(|e| AppError::Malformed(format!("classification parse failed: {e}")))?;

    ensure_unit_range("confidence", result.confidence)?;
    for (archetype, score) in result.secondary_types.iter() {
        ensure_unit_range(archetype.key(), score)?;
    }

    Ok(result)
}

fn ensure_unit_range(field: &str, value: f64) -> Result<(), AppError> {
    // The negated form also catches NaN.
    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::Malformed(format!(
            "{field} out of range: {value}"
        )));
    }
    Ok(())
}
