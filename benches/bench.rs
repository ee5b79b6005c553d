// Criterion benchmarks for Ember Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ember_match::core::scoring::{calculate_matching_score, DEFAULT_MAX_DISTANCE_KM};
use ember_match::core::{haversine_distance, Ranker};
use ember_match::models::{CandidateProfile, Coordinates, ProfileSnapshot};

fn create_snapshot(lat: f64, lng: f64) -> ProfileSnapshot {
    ProfileSnapshot {
        location: Some(Coordinates { lat, lng }),
        location_city: Some("New York".to_string()),
        interests: vec![
            "hiking".to_string(),
            "coffee".to_string(),
            "music".to_string(),
        ],
        looking_for: vec!["dating".to_string(), "friendship".to_string()],
        relationship_type: Some("long_term".to_string()),
        smoking: Some("never".to_string()),
        drinking: Some("socially".to_string()),
        children: Some("open".to_string()),
    }
}

fn create_candidate(id: usize) -> CandidateProfile {
    let lat_offset = (id as f64 * 0.001) % 0.5;
    let lng_offset = (id as f64 * 0.001) % 0.5;

    CandidateProfile {
        user_id: id.to_string(),
        profile: create_snapshot(40.7128 + lat_offset, -74.0060 + lng_offset),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(40.72),
                black_box(-74.01),
            )
        });
    });
}

fn bench_pair_scoring(c: &mut Criterion) {
    let a = create_snapshot(40.7128, -74.0060);
    let b = create_snapshot(40.72, -74.01);

    c.bench_function("calculate_matching_score", |bench| {
        bench.iter(|| {
            calculate_matching_score(black_box(&a), black_box(&b), DEFAULT_MAX_DISTANCE_KM)
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_range();
    let seeker = create_snapshot(40.7128, -74.0060);

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<CandidateProfile> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    ranker.rank(
                        black_box(&seeker),
                        candidates.clone(),
                        20,
                        None,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_pair_scoring,
    bench_ranking
);
criterion_main!(benches);
