use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::StructuredGenerator;
use crate::neynar::FarcasterSource;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both provider handles are built once at startup and shared read-only
/// across requests; each request otherwise owns all of its data.
#[derive(Clone)]
pub struct AppState {
    /// Profile and cast retrieval. Concrete impl: `NeynarClient`.
    pub farcaster: Arc<dyn FarcasterSource>,
    /// Schema-constrained generation. Concrete impl: `GeminiClient`.
    pub llm: Arc<dyn StructuredGenerator>,
    pub config: Config,
}
