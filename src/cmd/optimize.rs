use crate::reports;
use clap::Args;
use cogforge::api::{self, OptimizeRequest};
use cogforge::config::{Config, ScoringWeights};
use cogforge::error::CfResult;
use cogforge::inventory::Inventory;
use cogforge::optimizer::Solution;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Hard stop in seconds, on top of the generation budget.
    #[arg(long)]
    pub max_secs: Option<u64>,

    /// Write the optimized inventory snapshot here.
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: OptimizeArgs, inventory: &Inventory, weights: ScoringWeights) -> CfResult<()> {
    let mut request = OptimizeRequest::from(&args.config);
    request.weights = weights;
    request.seed = args.seed;
    request.max_time = args.max_secs.map(Duration::from_secs);

    reports::print_board("Current board", inventory);

    let progress = |percent: u8, best: &Solution| {
        info!("[{:>3}%] best {:.2}", percent, best.fitness());
        true
    };
    let outcome = api::optimize(inventory, &request, progress)?;

    reports::print_board("Optimized board", &outcome.final_inventory);
    reports::print_score_comparison(&outcome.initial_score, &outcome.score);
    reports::print_moves(&outcome.moves);
    println!("Score: {:.2}", outcome.score.total);

    if let Some(path) = &args.output {
        outcome.final_inventory.save_to_file(path)?;
        info!("Wrote optimized inventory to {}", path);
    }
    Ok(())
}
