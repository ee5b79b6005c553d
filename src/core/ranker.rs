use crate::core::scoring::{calculate_matching_score, location_accuracy, DEFAULT_MAX_DISTANCE_KM};
use crate::models::{CandidateProfile, ProfileSnapshot, RankedCandidate};

/// Result of ranking a candidate batch
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Discovery-feed ranking orchestrator
///
/// Scores every candidate against the seeker, sorts by total score
/// (location sub-score breaks ties) and truncates to the requested limit.
/// Holds only the configured default search radius, so a single instance
/// can be shared across handler tasks.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    max_distance_km: f64,
}

impl Ranker {
    pub fn new(max_distance_km: f64) -> Self {
        Self { max_distance_km }
    }

    pub fn with_default_range() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }

    /// Rank candidates for a seeker profile
    ///
    /// # Arguments
    /// * `seeker` - The profile requesting a discovery feed
    /// * `candidates` - Candidate profiles fetched from the data store
    /// * `limit` - Maximum number of ranked results to return
    /// * `max_distance_km` - Optional per-request override of the search radius
    pub fn rank(
        &self,
        seeker: &ProfileSnapshot,
        candidates: Vec<CandidateProfile>,
        limit: usize,
        max_distance_km: Option<f64>,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let radius = max_distance_km.unwrap_or(self.max_distance_km);

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let score = calculate_matching_score(seeker, &candidate.profile, radius);
                let accuracy = location_accuracy(&candidate.profile);

                RankedCandidate {
                    user_id: candidate.user_id,
                    score,
                    location_accuracy: accuracy,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| b.score.breakdown.location.cmp(&a.score.breakdown.location))
        });

        ranked.truncate(limit);

        RankResult {
            ranked,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_range()
    }
}
