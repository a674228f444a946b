use crate::reports;
use clap::Args;
use cogforge::api;
use cogforge::config::ScoringWeights;
use cogforge::error::CfResult;
use cogforge::inventory::Inventory;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub weights: ScoringWeights,
}

pub fn run(inventory: &Inventory, weights: ScoringWeights) -> CfResult<()> {
    let breakdown = api::score_inventory(inventory, &weights)?;

    reports::print_board("Current board", inventory);
    reports::print_score(&breakdown);
    println!("Score: {:.2}", breakdown.total);
    Ok(())
}
