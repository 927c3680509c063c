use serde::{Deserialize, Serialize};

/// The five founder archetypes. This set is closed: an unknown key in model
/// output fails deserialization rather than widening the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Visionary,
    Strategic,
    Community,
    Contrarian,
    Relentless,
}

impl Archetype {
    /// The wire key for this archetype.
    pub fn key(&self) -> &'static str {
        match self {
            Archetype::Visionary => "visionary",
            Archetype::Strategic => "strategic",
            Archetype::Community => "community",
            Archetype::Contrarian => "contrarian",
            Archetype::Relentless => "relentless",
        }
    }

    /// Human-readable archetype name, as used in the prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::Visionary => "The Visionary Builder",
            Archetype::Strategic => "The Strategic Operator",
            Archetype::Community => "The Community Catalyst",
            Archetype::Contrarian => "The Contrarian Thinker",
            Archetype::Relentless => "The Relentless Problem-Solver",
        }
    }

    pub const ALL: [Archetype; 5] = [
        Archetype::Visionary,
        Archetype::Strategic,
        Archetype::Community,
        Archetype::Contrarian,
        Archetype::Relentless,
    ];
}

/// Per-archetype match percentages, each in [0.0, 1.0].
///
/// These are independent scores, not a distribution — no sum-to-1 constraint
/// is enforced or implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeScores {
    pub visionary: f64,
    pub strategic: f64,
    pub community: f64,
    pub contrarian: f64,
    pub relentless: f64,
}

impl ArchetypeScores {
    /// Iterates scores keyed by archetype, for validation and tests.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, f64)> + '_ {
        [
            (Archetype::Visionary, self.visionary),
            (Archetype::Strategic, self.strategic),
            (Archetype::Community, self.community),
            (Archetype::Contrarian, self.contrarian),
            (Archetype::Relentless, self.relentless),
        ]
        .into_iter()
    }
}

/// The model's classification of one user. Produced once per request,
/// embedded verbatim into the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "primaryType")]
    pub primary_type: Archetype,
    pub confidence: f64,
    /// First-person analysis text, addressing the subject as "you".
    pub analysis: String,
    #[serde(rename = "secondaryTypes")]
    pub secondary_types: ArchetypeScores,
}

/// The external contract of `GET /analyze-user`. Constructed fresh per call,
/// returned, discarded — no server-side retention.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub fid: u64,
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "castsAnalyzed")]
    pub casts_analyzed: usize,
    pub analysis: ClassificationResult,
}
