// Core algorithm exports
pub mod distance;
pub mod ranker;
pub mod scoring;

pub use distance::haversine_distance;
pub use ranker::{RankResult, Ranker};
pub use scoring::{calculate_matching_score, location_accuracy, DEFAULT_MAX_DISTANCE_KM};
