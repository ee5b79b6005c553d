use std::collections::HashSet;

use crate::core::distance::haversine_distance;
use crate::models::{LocationAccuracy, MatchScore, ProfileSnapshot, ScoreBreakdown};

/// Default search radius when the caller does not override it
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Maximum points per sub-score
const LOCATION_MAX: f64 = 50.0;
const INTERESTS_MAX: f64 = 25.0;

/// Flat score for pairs with no usable location signal on either side.
/// A deliberate low-confidence default, not randomness.
const NO_LOCATION_FALLBACK: f64 = 5.0;

/// Calculate a compatibility score (0-100) for an ordered pair of profiles
///
/// Scoring breakdown:
/// - location:      0-50  (distance / city tiers, see `location_score`)
/// - interests:     0-25  (Jaccard similarity over interest tags)
/// - compatibility: 0-15  (smoking, drinking, children)
/// - preferences:   0-10  (relationship type + looking-for overlap)
///
/// Missing fields never fail; they degrade the relevant sub-score toward
/// its floor. Each sub-score is rounded independently, so the breakdown
/// always sums to the pre-clamp total.
pub fn calculate_matching_score(
    a: &ProfileSnapshot,
    b: &ProfileSnapshot,
    max_distance_km: f64,
) -> MatchScore {
    let location = location_score(a, b, max_distance_km).round() as u8;
    let interests = interest_score(a, b);
    let compatibility = lifestyle_score(a, b);
    let preferences = preference_score(a, b);

    let total = (location as u32 + interests as u32 + compatibility as u32 + preferences as u32)
        .min(100) as u8;

    MatchScore {
        total,
        breakdown: ScoreBreakdown {
            location,
            interests,
            compatibility,
            preferences,
        },
    }
}

/// Classify how precise a profile's location signal is
///
/// Display/explanation only; mirrors the tier precedence in `location_score`.
#[inline]
pub fn location_accuracy(profile: &ProfileSnapshot) -> LocationAccuracy {
    if profile.location.is_some() {
        LocationAccuracy::High
    } else if profile.location_city.is_some() {
        LocationAccuracy::Medium
    } else {
        LocationAccuracy::None
    }
}

/// Location sub-score (0-50), tiered by signal precision
///
/// 1. Both have GPS: linear falloff from 50 (co-located) to 0 at the
///    `max_distance_km` threshold.
/// 2. One has GPS: 50 on a confirmed city match, else 25.
/// 3. No GPS, both have city names: 25 on a match, else 0.
/// 4. Otherwise: flat 5-point fallback.
#[inline]
fn location_score(a: &ProfileSnapshot, b: &ProfileSnapshot, max_distance_km: f64) -> f64 {
    match (a.location, b.location) {
        (Some(pa), Some(pb)) => {
            let distance_km = haversine_distance(pa.lat, pa.lng, pb.lat, pb.lng);
            if distance_km >= max_distance_km {
                return 0.0;
            }
            LOCATION_MAX * (1.0 - distance_km / max_distance_km)
        }
        (Some(_), None) | (None, Some(_)) => {
            if same_city(a, b) {
                50.0
            } else {
                25.0
            }
        }
        (None, None) => {
            if a.location_city.is_some() && b.location_city.is_some() {
                if same_city(a, b) {
                    25.0
                } else {
                    0.0
                }
            } else {
                NO_LOCATION_FALLBACK
            }
        }
    }
}

/// Case-insensitive city comparison; unconfirmable when either side has no city
#[inline]
fn same_city(a: &ProfileSnapshot, b: &ProfileSnapshot) -> bool {
    match (&a.location_city, &b.location_city) {
        (Some(x), Some(y)) => x.to_lowercase() == y.to_lowercase(),
        _ => false,
    }
}

/// Interest sub-score (0-25): Jaccard similarity over normalized tags
#[inline]
fn interest_score(a: &ProfileSnapshot, b: &ProfileSnapshot) -> u8 {
    let tags_a = normalize_tags(&a.interests);
    let tags_b = normalize_tags(&b.interests);

    let union = tags_a.union(&tags_b).count();
    if union == 0 {
        return 0;
    }

    let intersection = tags_a.intersection(&tags_b).count();
    let similarity = intersection as f64 / union as f64;

    (similarity * INTERESTS_MAX).round() as u8
}

/// Lifestyle sub-score (0-15): three independent 5-point checks
#[inline]
fn lifestyle_score(a: &ProfileSnapshot, b: &ProfileSnapshot) -> u8 {
    habit_points(a.smoking.as_deref(), b.smoking.as_deref())
        + habit_points(a.drinking.as_deref(), b.drinking.as_deref())
        + children_points(a.children.as_deref(), b.children.as_deref())
}

/// Smoking/drinking check: exact match 5, never vs occasionally 2
#[inline]
fn habit_points(a: Option<&str>, b: Option<&str>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 5,
        (Some("never"), Some("occasionally")) | (Some("occasionally"), Some("never")) => 2,
        _ => 0,
    }
}

/// Children check: exact match 5, either side "open" 3
#[inline]
fn children_points(a: Option<&str>, b: Option<&str>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 5,
        (Some("open"), Some(_)) | (Some(_), Some("open")) => 3,
        _ => 0,
    }
}

/// Stated-preference sub-score (0-10)
#[inline]
fn preference_score(a: &ProfileSnapshot, b: &ProfileSnapshot) -> u8 {
    relationship_points(a.relationship_type.as_deref(), b.relationship_type.as_deref())
        + looking_for_points(&a.looking_for, &b.looking_for)
}

/// Relationship type: exact match 5, either side "not_sure" 2
#[inline]
fn relationship_points(a: Option<&str>, b: Option<&str>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 5,
        (Some("not_sure"), Some(_)) | (Some(_), Some("not_sure")) => 2,
        _ => 0,
    }
}

/// Looking-for overlap: 2 points per shared goal, capped at 5
#[inline]
fn looking_for_points(a: &[String], b: &[String]) -> u8 {
    let goals_a = normalize_tags(a);
    let goals_b = normalize_tags(b);
    let overlap = goals_a.intersection(&goals_b).count() as u32;

    (overlap * 2).min(5) as u8
}

#[inline]
fn normalize_tags(tags: &[String]) -> HashSet<String> {
    tags.iter().map(|tag| tag.to_lowercase()).collect()
}
