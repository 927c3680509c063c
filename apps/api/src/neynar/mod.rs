//! Farcaster content retrieval via the Neynar v2 REST API.
//!
//! `FarcasterSource` is the seam the orchestrator depends on; `NeynarClient`
//! is the production implementation. Test doubles implement the trait in
//! `analysis::testing`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::analysis::composer::CastInput;
use crate::errors::AppError;
use crate::models::farcaster::{CastPage, Profile};

const NEYNAR_API_BASE: &str = "https://api.neynar.com/v2/farcaster";

/// Profile and cast retrieval capability.
///
/// Both lookups return `Ok(None)` when the provider has no record of the
/// subject; transport and server-side failures are errors.
#[async_trait]
pub trait FarcasterSource: Send + Sync {
    async fn fetch_profile(&self, fid: u64) -> Result<Option<Profile>, AppError>;
    async fn fetch_casts(&self, fid: u64, limit: u32) -> Result<Option<CastPage>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (Neynar response shapes)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct BulkUsersResponse {
    users: Vec<NeynarUser>,
}

#[derive(Debug, Deserialize)]
struct NeynarUser {
    fid: u64,
    username: String,
    display_name: String,
}

impl From<NeynarUser> for Profile {
    fn from(user: NeynarUser) -> Self {
        Profile {
            fid: user.fid,
            username: user.username,
            display_name: user.display_name,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Neynar-backed `FarcasterSource`. Built once at startup and shared
/// read-only across requests.
#[derive(Clone)]
pub struct NeynarClient {
    client: Client,
    api_key: String,
}

impl NeynarClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn get(&self, url: &str) -> Result<Option<reqwest::Response>, AppError> {
        let response = self
            .client
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Neynar request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!("Neynar returned {status}: {body}")));
        }
        Ok(Some(response))
    }
}

#[async_trait]
impl FarcasterSource for NeynarClient {
    async fn fetch_profile(&self, fid: u64) -> Result<Option<Profile>, AppError> {
        let url = format!("{NEYNAR_API_BASE}/user/bulk?fids={fid}");
        let Some(response) = self.get(&url).await? else {
            return Ok(None);
        };

        let bulk: BulkUsersResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Neynar profile response: {e}")))?;

        debug!("Fetched profile for fid {fid}");
        Ok(bulk.users.into_iter().next().map(Profile::from))
    }

    async fn fetch_casts(&self, fid: u64, limit: u32) -> Result<Option<CastPage>, AppError> {
        let url = format!("{NEYNAR_API_BASE}/feed/user/casts?fid={fid}&limit={limit}");
        let Some(response) = self.get(&url).await? else {
            return Ok(None);
        };

        let value: Value = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Neynar casts response: {e}")))?;

        // The page body is one of the accepted cast input shapes (a wrapper
        // object holding a cast list). A container that matches none of them
        // means there is nothing analyzable for this user.
        let casts = match CastInput::from_value(value) {
            Ok(input) => input.normalize(),
            Err(e) => {
                warn!("Malformed cast container for fid {fid}: {e}");
                return Ok(None);
            }
        };
        debug!("Fetched {} casts for fid {fid}", casts.len());

        let count = casts.len();
        Ok(Some(CastPage { casts, count }))
    }
}
