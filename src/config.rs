use crate::error::{CfResult, CogForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = 100)]
    pub population_size: usize,
    #[arg(long, default_value_t = 0.15)]
    pub mutation_rate: f64,
    #[arg(long, default_value_t = 0.7)]
    pub crossover_rate: f64,
    #[arg(long, default_value_t = 10)]
    pub elite_count: usize,
    #[arg(long, default_value_t = 3)]
    pub tournament_size: usize,

    /// Wall-clock budget mapped onto a generation count.
    #[arg(short = 'T', long, default_value_t = 2500)]
    pub time_budget_ms: u64,
    #[arg(long, default_value_t = 10)]
    pub ms_per_generation: u64,

    /// How many ranked arrangements the optimizer hands back.
    #[arg(long, default_value_t = 10)]
    pub ranked_count: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.15,
            crossover_rate: 0.7,
            elite_count: 10,
            tournament_size: 3,
            time_budget_ms: 2500,
            ms_per_generation: 10,
            ranked_count: 10,
        }
    }
}

impl SearchParams {
    pub fn generations(&self) -> usize {
        let per_gen = self.ms_per_generation.max(1);
        ((self.time_budget_ms / per_gen) as usize).max(1)
    }

    pub fn validate(&self) -> CfResult<()> {
        if self.time_budget_ms == 0 {
            return Err(CogForgeError::Config(
                "time_budget_ms must be greater than zero".to_string(),
            ));
        }
        for (name, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(CogForgeError::Config(format!(
                    "{} must lie in [0, 1], got {}",
                    name, rate
                )));
            }
        }
        if self.tournament_size == 0 {
            return Err(CogForgeError::Config(
                "tournament_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Objective weights. Passed by value into every run.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    #[arg(long = "weight-build", default_value_t = 1.0)]
    pub build_rate: f64,
    #[arg(long = "weight-exp", default_value_t = 1.0)]
    pub exp_bonus: f64,
    #[arg(long = "weight-flaggy", default_value_t = 1.0)]
    pub flaggy_rate: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            build_rate: 1.0,
            exp_bonus: 1.0,
            flaggy_rate: 1.0,
        }
    }
}

impl ScoringWeights {
    pub fn new(build_rate: f64, exp_bonus: f64, flaggy_rate: f64) -> Self {
        Self {
            build_rate,
            exp_bonus,
            flaggy_rate,
        }
    }

    pub fn validate(&self) -> CfResult<()> {
        for (name, w) in [
            ("buildRate", self.build_rate),
            ("expBonus", self.exp_bonus),
            ("flaggyRate", self.flaggy_rate),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(CogForgeError::Config(format!(
                    "weight '{}' must be a finite number >= 0, got {}",
                    name, w
                )));
            }
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Overlays weights the user typed on the command line onto `self`.
    pub fn merge_from_cli(&mut self, cli: &ScoringWeights, matches: &ArgMatches) {
        let from_cli = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

        if from_cli("build_rate") {
            self.build_rate = cli.build_rate;
        }
        if from_cli("exp_bonus") {
            self.exp_bonus = cli.exp_bonus;
        }
        if from_cli("flaggy_rate") {
            self.flaggy_rate = cli.flaggy_rate;
        }
    }
}
