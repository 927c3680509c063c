//! Request Orchestrator — sequences fetch → compose → classify → validate.
//!
//! Flow: concurrent profile + cast fetch (join) → prompt composition →
//! one schema-constrained Gemini call → strict validation → response.
//!
//! The operation is atomic from the caller's perspective: a complete
//! `AnalysisResponse` or an error, never a partial result.

use tracing::info;

use crate::analysis::composer::{compose, CastInput};
use crate::analysis::validation::validate;
use crate::errors::AppError;
use crate::llm_client::StructuredGenerator;
use crate::models::analysis::AnalysisResponse;
use crate::neynar::FarcasterSource;

/// Analyzes one user's founder archetype.
///
/// The two fetches have no ordering dependency and run concurrently;
/// `try_join!` short-circuits on the first failure. Everything after the
/// join is strictly sequential.
pub async fn analyze_user(
    farcaster: &dyn FarcasterSource,
    llm: &dyn StructuredGenerator,
    fid: u64,
    cast_limit: u32,
) -> Result<AnalysisResponse, AppError> {
    info!("Fetching profile and casts for fid {fid}");
    let (profile, page) = tokio::try_join!(
        farcaster.fetch_profile(fid),
        farcaster.fetch_casts(fid, cast_limit),
    )?;

    let profile = profile.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let page = page
        .filter(|p| !p.casts.is_empty())
        .ok_or_else(|| AppError::NoContent("No casts found for user".to_string()))?;

    let composed = compose(CastInput::Many(page.casts), &profile)?;
    info!(
        "Composed prompt for @{} ({} casts)",
        profile.username, composed.cast_count
    );

    let raw = llm.generate(&composed.text, &composed.schema).await?;
    let analysis = validate(&raw)?;
    info!(
        "Classified @{} as {} (confidence {:.2})",
        profile.username,
        analysis.primary_type.key(),
        analysis.confidence
    );

    Ok(AnalysisResponse {
        fid: profile.fid,
        username: profile.username,
        display_name: profile.display_name,
        casts_analyzed: composed.cast_count,
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing::{
        casts_fixture, classification_payload, profile_fixture, StubFarcaster, StubGenerator,
    };
    use crate::llm_client::LlmError;
    use crate::models::analysis::Archetype;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn successful_analysis_embeds_classification_verbatim() {
        let farcaster = StubFarcaster {
            profile: Some(profile_fixture()),
            page: Some(casts_fixture(&["gm @bob", "thanks @bob", "a", "b", "c"])),
        };
        let llm = StubGenerator::returning(classification_payload());

        let response = analyze_user(&farcaster, &llm, 123, 300).await.unwrap();

        assert_eq!(response.fid, 123);
        assert_eq!(response.username, "alice");
        assert_eq!(response.display_name, "Alice");
        assert_eq!(response.casts_analyzed, 5);
        assert_eq!(response.analysis.primary_type, Archetype::Visionary);
        assert!((response.analysis.confidence - 0.8).abs() < f64::EPSILON);
        assert!((response.analysis.secondary_types.contrarian - 0.05).abs() < f64::EPSILON);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_profile_is_not_found_and_skips_the_model() {
        let farcaster = StubFarcaster {
            profile: None,
            page: Some(casts_fixture(&["gm"])),
        };
        let llm = StubGenerator::returning(classification_payload());

        let err = analyze_user(&farcaster, &llm, 123, 300).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_cast_page_is_no_content() {
        let farcaster = StubFarcaster {
            profile: Some(profile_fixture()),
            page: None,
        };
        let llm = StubGenerator::returning(classification_payload());

        let err = analyze_user(&farcaster, &llm, 123, 300).await.unwrap_err();
        assert!(matches!(err, AppError::NoContent(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_cast_page_is_no_content_and_never_reaches_the_model() {
        let farcaster = StubFarcaster {
            profile: Some(profile_fixture()),
            page: Some(casts_fixture(&[])),
        };
        let llm = StubGenerator::returning(classification_payload());

        let err = analyze_user(&farcaster, &llm, 123, 300).await.unwrap_err();
        assert!(matches!(err, AppError::NoContent(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_failure_is_terminal_and_not_retried() {
        let farcaster = StubFarcaster {
            profile: Some(profile_fixture()),
            page: Some(casts_fixture(&["gm"])),
        };
        let llm = StubGenerator::failing(|| LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        });

        let err = analyze_user(&farcaster, &llm, 123, 300).await.unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn disabled_client_surfaces_as_provider_error() {
        let farcaster = StubFarcaster {
            profile: Some(profile_fixture()),
            page: Some(casts_fixture(&["gm"])),
        };
        let llm = StubGenerator::failing(|| LlmError::Disabled);

        let err = analyze_user(&farcaster, &llm, 123, 300).await.unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[tokio::test]
    async fn malformed_payload_is_rejected() {
        let farcaster = StubFarcaster {
            profile: Some(profile_fixture()),
            page: Some(casts_fixture(&["gm"])),
        };
        let llm = StubGenerator::returning("{\"primaryType\": \"visionary\"}".to_string());

        let err = analyze_user(&farcaster, &llm, 123, 300).await.unwrap_err();
        assert!(matches!(err, AppError::Malformed(_)));
    }

    #[tokio::test]
    async fn out_of_range_confidence_is_rejected() {
        let farcaster = StubFarcaster {
            profile: Some(profile_fixture()),
            page: Some(casts_fixture(&["gm"])),
        };
        let llm =
            StubGenerator::returning(classification_payload().replace("0.8,", "1.8,"));

        let err = analyze_user(&farcaster, &llm, 123, 300).await.unwrap_err();
        assert!(matches!(err, AppError::Malformed(_)));
    }
}
