use crate::config::{Config, ScoringWeights, SearchParams};
use crate::core_types::Arrangement;
use crate::error::CfResult;
use crate::inventory::Inventory;
use crate::optimizer::{GeneticOptimizer, OptimizationOptions, ProgressCallback};
use crate::planner::{plan_moves, Move};
use crate::scorer::{ScoreBreakdown, Scorer};
use std::time::Duration;
use tracing::{info, warn};

/// Everything one optimization run needs. Owned by the caller and passed by
/// reference; nothing is kept between runs.
#[derive(Debug, Clone, Default)]
pub struct OptimizeRequest {
    pub weights: ScoringWeights,
    pub search: SearchParams,
    /// Seeded runs are reproducible; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Hard wall-clock stop on top of the generation count.
    pub max_time: Option<Duration>,
}

impl From<&Config> for OptimizeRequest {
    fn from(cfg: &Config) -> Self {
        Self {
            weights: cfg.weights,
            search: cfg.search.clone(),
            seed: None,
            max_time: None,
        }
    }
}

impl OptimizeRequest {
    pub fn new(weights: ScoringWeights, time_budget_ms: u64) -> Self {
        Self {
            weights,
            search: SearchParams {
                time_budget_ms,
                ..Default::default()
            },
            seed: None,
            max_time: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    pub final_inventory: Inventory,
    pub moves: Vec<Move>,
    pub score: ScoreBreakdown,
    pub initial_score: ScoreBreakdown,
    pub arrangement: Arrangement,
    pub generations_run: usize,
    pub cancelled: bool,
}

/// Searches for a better board, plans the moves to reach it and commits them
/// to a copy of `inventory`.
pub fn optimize<CB: ProgressCallback>(
    inventory: &Inventory,
    request: &OptimizeRequest,
    callback: CB,
) -> CfResult<OptimizationOutcome> {
    request.weights.validate()?;
    request.search.validate()?;

    let scorer = Scorer::new(inventory);
    let initial_score = scorer.score(scorer.current_arrangement(), &request.weights);

    let mut options = OptimizationOptions::from(&request.search);
    options.max_time = request.max_time;
    options.initial_population = vec![scorer.current_arrangement().clone()];

    let mut rng = match request.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let optimizer = GeneticOptimizer::new(&scorer, request.weights, options);
    let result = optimizer.run(&mut rng, callback)?;
    if result.cancelled {
        warn!(
            "Optimization cancelled after {} generations; using best so far",
            result.generations_run
        );
    }

    let plan = plan_moves(inventory, &scorer.pool, &result.best.arrangement)?;
    let mut final_inventory = inventory.clone();
    plan.apply(&mut final_inventory)?;

    let score = final_inventory.score(&request.weights);
    info!(
        "Score {:.2} -> {:.2} with {} moves",
        initial_score.total,
        score.total,
        plan.len()
    );

    Ok(OptimizationOutcome {
        final_inventory,
        moves: plan.moves,
        score,
        initial_score,
        arrangement: result.best.arrangement,
        generations_run: result.generations_run,
        cancelled: result.cancelled,
    })
}

/// Score of the inventory as it stands.
pub fn score_inventory(inventory: &Inventory, weights: &ScoringWeights) -> CfResult<ScoreBreakdown> {
    weights.validate()?;
    Ok(inventory.score(weights))
}
