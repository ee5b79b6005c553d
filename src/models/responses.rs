use serde::{Deserialize, Serialize};

use crate::models::domain::{LocationAccuracy, MatchScore, RankedCandidate};

/// Response for the pair scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairResponse {
    pub score: MatchScore,
    #[serde(rename = "profileAAccuracy")]
    pub profile_a_accuracy: LocationAccuracy,
    #[serde(rename = "profileBAccuracy")]
    pub profile_b_accuracy: LocationAccuracy,
}

/// Response for the candidate ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    pub matches: Vec<RankedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
