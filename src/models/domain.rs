use serde::{Deserialize, Serialize};

/// Geographic coordinate, present when the user has granted location access
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Read-only projection of a user's attributes used as scoring input
///
/// Every field is optional; the scorer treats absence as a low-information
/// signal, never as an error. Wire names follow the app backend's camelCase
/// conventions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub location: Option<Coordinates>,
    #[serde(alias = "location_city", rename = "locationCity", default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(alias = "looking_for", rename = "lookingFor", default)]
    pub looking_for: Vec<String>,
    #[serde(alias = "relationship_type", rename = "relationshipType", default)]
    pub relationship_type: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub children: Option<String>,
}

/// Per-component decomposition of a match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub location: u8,
    pub interests: u8,
    pub compatibility: u8,
    pub preferences: u8,
}

/// Compatibility score for an ordered pair of profiles
///
/// `total` is clamped to 0-100; the breakdown integers sum to the
/// pre-clamp total. Computed per call and never persisted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "totalScore")]
    pub total: u8,
    pub breakdown: ScoreBreakdown,
}

/// How precise a profile's location signal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationAccuracy {
    High,
    Medium,
    None,
}

impl LocationAccuracy {
    /// Confidence percentage shown alongside the tier in the app
    pub fn confidence_percent(&self) -> u8 {
        match self {
            LocationAccuracy::High => 100,
            LocationAccuracy::Medium => 50,
            LocationAccuracy::None => 0,
        }
    }
}

/// Candidate profile as fetched by a discovery feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(flatten)]
    pub profile: ProfileSnapshot,
}

/// Scored entry in a ranked discovery feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "matchScore")]
    pub score: MatchScore,
    #[serde(rename = "locationAccuracy")]
    pub location_accuracy: LocationAccuracy,
}
