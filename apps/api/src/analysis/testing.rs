//! Test doubles for the two provider seams, shared by analyzer and handler
//! tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{LlmError, StructuredGenerator};
use crate::models::farcaster::{Cast, CastPage, Profile};
use crate::neynar::FarcasterSource;

pub fn profile_fixture() -> Profile {
    Profile {
        fid: 123,
        username: "alice".to_string(),
        display_name: "Alice".to_string(),
    }
}

pub fn casts_fixture(texts: &[&str]) -> CastPage {
    let casts: Vec<Cast> = texts
        .iter()
        .map(|t| Cast {
            text: t.to_string(),
        })
        .collect();
    let count = casts.len();
    CastPage { casts, count }
}

/// Canned classification payload matching the valid-response scenario.
pub fn classification_payload() -> String {
    r#"{
        "primaryType": "visionary",
        "confidence": 0.8,
        "analysis": "You are a visionary founder who bets on the long arc.",
        "secondaryTypes": {
            "visionary": 0.8,
            "strategic": 0.3,
            "community": 0.1,
            "contrarian": 0.05,
            "relentless": 0.2
        }
    }"#
    .to_string()
}

/// `FarcasterSource` double returning fixed lookup results.
pub struct StubFarcaster {
    pub profile: Option<Profile>,
    pub page: Option<CastPage>,
}

#[async_trait]
impl FarcasterSource for StubFarcaster {
    async fn fetch_profile(&self, _fid: u64) -> Result<Option<Profile>, AppError> {
        Ok(self.profile.clone())
    }

    async fn fetch_casts(&self, _fid: u64, _limit: u32) -> Result<Option<CastPage>, AppError> {
        Ok(self.page.clone())
    }
}

/// `FarcasterSource` double failing both lookups, as during a provider
/// outage.
pub struct OutageFarcaster;

#[async_trait]
impl FarcasterSource for OutageFarcaster {
    async fn fetch_profile(&self, _fid: u64) -> Result<Option<Profile>, AppError> {
        Err(AppError::Provider(
            "Neynar returned 502 Bad Gateway: upstream connect error".to_string(),
        ))
    }

    async fn fetch_casts(&self, _fid: u64, _limit: u32) -> Result<Option<CastPage>, AppError> {
        Err(AppError::Provider(
            "Neynar returned 502 Bad Gateway: upstream connect error".to_string(),
        ))
    }
}

/// `StructuredGenerator` double returning a canned payload or error, and
/// counting invocations so tests can assert the model was never reached.
pub struct StubGenerator {
    pub response: Result<String, fn() -> LlmError>,
    pub calls: Arc<AtomicU32>,
}

impl StubGenerator {
    pub fn returning(payload: String) -> Self {
        Self {
            response: Ok(payload),
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn failing(error: fn() -> LlmError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::new(AtomicU32::new(0)),
        }
    }
}

#[async_trait]
impl StructuredGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str, _schema: &Value) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(payload) => Ok(payload.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}
