mod common;

use common::{key, mixed_inventory, ItemBuilder};
use cogforge::config::ScoringWeights;
use cogforge::error::CogForgeError;
use cogforge::inventory::{BoostRadius, Inventory};
use cogforge::optimizer::{
    GeneticOptimizer, NoProgress, OptimizationOptions, ProgressCallback, SearchSpace, Solution,
};
use cogforge::scorer::Scorer;
use std::time::Duration;

fn quick_options(generations: usize) -> OptimizationOptions {
    OptimizationOptions {
        population_size: 30,
        generations,
        elite_count: 4,
        ranked_count: 5,
        ..Default::default()
    }
}

#[test]
fn test_no_movable_items_is_empty_population() {
    let mut inv = Inventory::new();
    inv.place(
        key(2, 2),
        ItemBuilder::new(1)
            .radius(BoostRadius::Everything)
            .fixed()
            .build(),
    )
    .unwrap();
    inv.place(120, ItemBuilder::new(2).build_rate(5.0).build()).unwrap();

    let scorer = Scorer::new(&inv);
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), quick_options(5));
    let mut rng = fastrand::Rng::with_seed(1);

    let err = optimizer.run(&mut rng, NoProgress).unwrap_err();
    assert!(matches!(err, CogForgeError::EmptyPopulation(_)));
}

#[test]
fn test_zero_population_is_empty_population() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let options = OptimizationOptions {
        population_size: 0,
        ..quick_options(5)
    };
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), options);

    let result = optimizer.run(&mut fastrand::Rng::with_seed(1), NoProgress);
    assert!(matches!(result, Err(CogForgeError::EmptyPopulation(_))));
}

#[test]
fn test_best_history_never_decreases() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), quick_options(60));

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(7), NoProgress)
        .unwrap();

    assert_eq!(result.best_history.len(), 60);
    assert_eq!(result.generations_run, 60);
    for pair in result.best_history.windows(2) {
        assert!(pair[1] >= pair[0], "{} dropped to {}", pair[0], pair[1]);
    }
    assert_eq!(result.best_history.last().copied(), Some(result.best.fitness()));
}

#[test]
fn test_pins_and_blocked_cells_respected() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let space = SearchSpace::from_scorer(&scorer);
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), quick_options(40));

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(11), NoProgress)
        .unwrap();

    let anchor = scorer.current_arrangement().get(key(7, 0) as usize);
    assert!(anchor.is_some());
    for solution in &result.ranked {
        assert!(space.admits(&solution.arrangement));
        assert_eq!(solution.arrangement.get(key(7, 0) as usize), anchor);
        assert!(solution.arrangement.get(key(0, 0) as usize).is_none());
        assert!(solution.arrangement.get(key(4, 6) as usize).is_none());
    }
}

#[test]
fn test_ranked_is_best_first_and_distinct() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), quick_options(20));

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(3), NoProgress)
        .unwrap();

    assert!(!result.ranked.is_empty() && result.ranked.len() <= 5);
    assert_eq!(result.ranked[0], result.best);
    for (i, a) in result.ranked.iter().enumerate() {
        assert!(a.fitness() <= result.best.fitness());
        for b in &result.ranked[i + 1..] {
            assert_ne!(a.arrangement, b.arrangement);
        }
    }
}

#[test]
fn test_seeded_current_layout_is_never_beaten_downward() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let weights = ScoringWeights::new(1.0, 1.0, 2.0);
    let current = scorer.score(scorer.current_arrangement(), &weights);

    let mut options = quick_options(10);
    options.initial_population = vec![scorer.current_arrangement().clone()];
    let optimizer = GeneticOptimizer::new(&scorer, weights, options);

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(5), NoProgress)
        .unwrap();
    assert!(result.best.fitness() >= current.total);
}

#[test]
fn test_progress_reports_and_abort() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), quick_options(50));

    let mut seen = Vec::new();
    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(9), |percent: u8, _best: &Solution| {
            seen.push(percent);
            true
        })
        .unwrap();
    assert_eq!(seen, vec![20, 40, 60, 80, 100]);
    assert!(!result.cancelled);

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(9), |_percent: u8, _best: &Solution| false)
        .unwrap();
    assert!(result.cancelled);
    assert_eq!(result.generations_run, 10);
}

struct CancelImmediately;

impl ProgressCallback for CancelImmediately {
    fn on_progress(&mut self, _percent: u8, _best: &Solution) -> bool {
        true
    }

    fn should_cancel(&self) -> bool {
        true
    }
}

#[test]
fn test_cancellation_still_returns_best() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), quick_options(50));

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(2), CancelImmediately)
        .unwrap();
    assert!(result.cancelled);
    assert_eq!(result.generations_run, 0);
    assert!(result.best_history.is_empty());
    assert!(!result.ranked.is_empty());
}

#[test]
fn test_deadline_stops_search() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let options = OptimizationOptions {
        max_time: Some(Duration::ZERO),
        ..quick_options(1_000)
    };
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), options);

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(2), NoProgress)
        .unwrap();
    assert_eq!(result.generations_run, 0);
    assert!(!result.cancelled);
}

#[test]
fn test_invalid_seed_arrangement_is_discarded() {
    let inv = mixed_inventory();
    let scorer = Scorer::new(&inv);
    let mut bogus = scorer.current_arrangement().clone();
    // Drop the pinned anchor.
    bogus.set(key(7, 0) as usize, None);

    let mut options = quick_options(5);
    options.initial_population = vec![bogus.clone()];
    let optimizer = GeneticOptimizer::new(&scorer, ScoringWeights::default(), options);

    let result = optimizer
        .run(&mut fastrand::Rng::with_seed(4), NoProgress)
        .unwrap();
    assert!(result.ranked.iter().all(|s| s.arrangement != bogus));
}
