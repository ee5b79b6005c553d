//! Ember Match - Compatibility scoring service for the Ember dating app
//!
//! This library provides the compatibility scoring engine used by the Ember
//! dating app. The core is a pure, stateless scorer that turns an ordered
//! pair of profile snapshots into a 0-100 match score with a four-part
//! breakdown (location, interests, lifestyle compatibility, preferences).

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_matching_score, haversine_distance, location_accuracy, Ranker};
pub use crate::models::{
    CandidateProfile, Coordinates, LocationAccuracy, MatchScore, ProfileSnapshot, RankedCandidate,
    ScoreBreakdown,
};
