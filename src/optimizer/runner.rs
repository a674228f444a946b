use super::crossover::crossover;
use super::initialization::random_arrangement;
use super::mutation::swap_mutation;
use super::selection::tournament;
use super::{SearchSpace, Solution};
use crate::config::{ScoringWeights, SearchParams};
use crate::core_types::Arrangement;
use crate::error::{CfResult, CogForgeError};
use crate::scorer::Scorer;
use fastrand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub elite_count: usize,
    pub tournament_size: usize,
    pub ranked_count: usize,
    pub max_time: Option<Duration>,
    /// Arrangements injected before random members (e.g. the current layout).
    pub initial_population: Vec<Arrangement>,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&SearchParams::default())
    }
}

impl From<&SearchParams> for OptimizationOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            population_size: params.population_size,
            generations: params.generations(),
            mutation_rate: params.mutation_rate,
            crossover_rate: params.crossover_rate,
            elite_count: params.elite_count,
            tournament_size: params.tournament_size,
            ranked_count: params.ranked_count,
            max_time: None, // Set manually if needed
            initial_population: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best arrangement seen in any generation.
    pub best: Solution,
    /// Best first, distinct arrangements, drawn from `best` and the final
    /// population.
    pub ranked: Vec<Solution>,
    /// Best-so-far fitness after each generation; never decreases.
    pub best_history: Vec<f64>,
    pub generations_run: usize,
    pub cancelled: bool,
}

/// Receives updates during optimization.
/// Returning false from `on_progress` aborts the search.
pub trait ProgressCallback {
    fn on_progress(&mut self, percent: u8, best: &Solution) -> bool;

    /// Polled once per generation.
    fn should_cancel(&self) -> bool {
        false
    }
}

impl<F> ProgressCallback for F
where
    F: FnMut(u8, &Solution) -> bool,
{
    fn on_progress(&mut self, percent: u8, best: &Solution) -> bool {
        self(percent, best)
    }
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&mut self, _percent: u8, _best: &Solution) -> bool {
        true
    }
}

pub struct GeneticOptimizer<'a> {
    scorer: &'a Scorer,
    weights: ScoringWeights,
    options: OptimizationOptions,
}

impl<'a> GeneticOptimizer<'a> {
    pub fn new(scorer: &'a Scorer, weights: ScoringWeights, options: OptimizationOptions) -> Self {
        Self {
            scorer,
            weights,
            options,
        }
    }

    fn evaluate(&self, arrangement: Arrangement) -> Solution {
        let breakdown = self.scorer.score(&arrangement, &self.weights);
        Solution {
            arrangement,
            breakdown,
        }
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        rng: &mut Rng,
        mut callback: CB,
    ) -> CfResult<OptimizationResult> {
        let opts = &self.options;
        let space = SearchSpace::from_scorer(self.scorer);

        if space.movable.is_empty() {
            return Err(CogForgeError::EmptyPopulation(
                "no movable items on the board".to_string(),
            ));
        }
        if opts.population_size == 0 {
            return Err(CogForgeError::EmptyPopulation(
                "population size is zero".to_string(),
            ));
        }

        let generations = opts.generations.max(1);
        let elite = opts.elite_count.min(opts.population_size);
        info!(
            "Spawning population of {} for {} generations ({} movable items, {} free cells)",
            opts.population_size,
            generations,
            space.movable.len(),
            space.free_cells.len()
        );

        // 1. Initial population
        let mut population = Vec::with_capacity(opts.population_size);
        for seed in &opts.initial_population {
            if population.len() >= opts.population_size {
                break;
            }
            if space.admits(seed) {
                population.push(self.evaluate(seed.clone()));
            } else {
                warn!("Discarding seeded arrangement that does not match the board");
            }
        }
        while population.len() < opts.population_size {
            population.push(self.evaluate(random_arrangement(&space, rng)));
        }
        sort_by_fitness(&mut population);

        let mut best = match population.first() {
            Some(top) => top.clone(),
            None => {
                return Err(CogForgeError::EmptyPopulation(
                    "initialization produced no solution".to_string(),
                ))
            }
        };

        // 2. Evolve
        let progress_every = (generations / 5).max(1);
        let start_time = Instant::now();
        let mut best_history = Vec::with_capacity(generations);
        let mut generations_run = 0;
        let mut cancelled = false;

        for generation in 1..=generations {
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    debug!("Time limit reached after {} generations", generations_run);
                    break;
                }
            }
            if callback.should_cancel() {
                cancelled = true;
                break;
            }

            population = self.next_generation(&population, &space, elite, rng);
            generations_run = generation;

            if let Some(top) = population.first() {
                if top.fitness() > best.fitness() {
                    debug!(
                        "Generation {}: new best {:.2} (was {:.2})",
                        generation,
                        top.fitness(),
                        best.fitness()
                    );
                    best = top.clone();
                }
            }
            best_history.push(best.fitness());

            if generation % progress_every == 0 || generation == generations {
                let percent = (generation * 100 / generations) as u8;
                if !callback.on_progress(percent, &best) {
                    cancelled = true;
                    break;
                }
            }
        }

        // 3. Rank
        let keep = opts.ranked_count.max(1);
        let mut ranked = vec![best.clone()];
        for candidate in &population {
            if ranked.len() >= keep {
                break;
            }
            if ranked.iter().all(|r| r.arrangement != candidate.arrangement) {
                ranked.push(candidate.clone());
            }
        }

        info!(
            "Search finished after {} generations in {:.2?}. Best fitness {:.2}",
            generations_run,
            start_time.elapsed(),
            best.fitness()
        );

        Ok(OptimizationResult {
            best,
            ranked,
            best_history,
            generations_run,
            cancelled,
        })
    }

    /// Elites survive as clones; the rest are bred from tournament winners.
    fn next_generation(
        &self,
        population: &[Solution],
        space: &SearchSpace,
        elite: usize,
        rng: &mut Rng,
    ) -> Vec<Solution> {
        let opts = &self.options;
        let mut next: Vec<Solution> = population.iter().take(elite).cloned().collect();

        while next.len() < opts.population_size {
            let parent_a = tournament(population, opts.tournament_size, rng);
            let parent_b = tournament(population, opts.tournament_size, rng);

            let mut child = if rng.f64() < opts.crossover_rate {
                crossover(&parent_a.arrangement, &parent_b.arrangement, space, rng)
            } else {
                parent_a.arrangement.clone()
            };
            if rng.f64() < opts.mutation_rate {
                swap_mutation(&mut child, space, rng);
            }
            next.push(self.evaluate(child));
        }

        sort_by_fitness(&mut next);
        next
    }
}

fn sort_by_fitness(population: &mut [Solution]) {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}
