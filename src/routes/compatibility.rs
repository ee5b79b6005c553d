use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::scoring::{calculate_matching_score, location_accuracy, DEFAULT_MAX_DISTANCE_KM};
use crate::core::Ranker;
use crate::models::{
    ErrorResponse, HealthResponse, RankCandidatesRequest, RankCandidatesResponse,
    ScorePairRequest, ScorePairResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub max_limit: usize,
}

/// Configure all compatibility-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/rank", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single ordered pair of profiles
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "location": {"lat": 40.7, "lng": -74.0}, "interests": ["hiking"] },
///   "profileB": { "locationCity": "New York" },
///   "maxDistanceKm": 50
/// }
/// ```
async fn score_pair(req: web::Json<ScorePairRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let max_distance_km = req.max_distance_km.unwrap_or(DEFAULT_MAX_DISTANCE_KM);
    let score = calculate_matching_score(&req.profile_a, &req.profile_b, max_distance_km);

    tracing::debug!(
        "Scored pair: total={} (location={}, interests={}, compatibility={}, preferences={})",
        score.total,
        score.breakdown.location,
        score.breakdown.interests,
        score.breakdown.compatibility,
        score.breakdown.preferences
    );

    HttpResponse::Ok().json(ScorePairResponse {
        score,
        profile_a_accuracy: location_accuracy(&req.profile_a),
        profile_b_accuracy: location_accuracy(&req.profile_b),
    })
}

/// Rank a batch of candidates for a seeker
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "profile": { ... },
///   "candidates": [{ "userId": "string", ... }],
///   "limit": 20,
///   "maxDistanceKm": 50
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!(
        "Ranking {} candidates for user {}, limit {}",
        req.candidates.len(),
        req.user_id,
        limit
    );

    let req = req.into_inner();
    let result = state
        .ranker
        .rank(&req.profile, req.candidates, limit, req.max_distance_km);

    tracing::debug!(
        "Returning {} ranked matches for user {} (from {} candidates)",
        result.ranked.len(),
        req.user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(RankCandidatesResponse {
        matches: result.ranked,
        total_candidates: result.total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
