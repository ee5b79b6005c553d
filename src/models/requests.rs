use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateProfile, ProfileSnapshot};

/// Request to score a single ordered pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorePairRequest {
    #[serde(alias = "profile_a", rename = "profileA")]
    pub profile_a: ProfileSnapshot,
    #[serde(alias = "profile_b", rename = "profileB")]
    pub profile_b: ProfileSnapshot,
    #[validate(range(min = 1.0, max = 20000.0))]
    #[serde(alias = "max_distance_km", rename = "maxDistanceKm", default)]
    pub max_distance_km: Option<f64>,
}

/// Request to rank a batch of candidates for a seeker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub profile: ProfileSnapshot,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[validate(range(min = 1.0, max = 20000.0))]
    #[serde(alias = "max_distance_km", rename = "maxDistanceKm", default)]
    pub max_distance_km: Option<f64>,
}

fn default_limit() -> u16 {
    20
}
