// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Coordinates, LocationAccuracy, MatchScore, ProfileSnapshot, RankedCandidate,
    ScoreBreakdown,
};
pub use requests::{RankCandidatesRequest, ScorePairRequest};
pub use responses::{ErrorResponse, HealthResponse, RankCandidatesResponse, ScorePairResponse};
