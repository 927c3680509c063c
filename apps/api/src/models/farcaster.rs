use serde::{Deserialize, Serialize};

/// Identifying metadata for a Farcaster user. Fetched fresh per request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub fid: u64,
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// A single public cast. Mentions are derived from `text` at compose time,
/// not stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cast {
    pub text: String,
}

/// One page of a user's cast history, as returned by the content provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastPage {
    pub casts: Vec<Cast>,
    pub count: usize,
}
