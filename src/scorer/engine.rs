use super::{Metrics, Scorer};
use crate::core_types::Arrangement;
use crate::geometry::BOARD_SIZE;

/// Bonuses collected at one cell from every source whose pattern reaches it.
#[derive(Debug, Default, Clone, Copy)]
pub struct CellBonus {
    pub build_pct: f64,
    pub flaggy_pct: f64,
    pub exp_boost: f64,
    pub flag_boost: f64,
}

/// Pass 1: spread every source item's boosts over its pattern targets.
/// Targets include blocked cells so flag markers can collect.
pub fn propagate(scorer: &Scorer, arrangement: &Arrangement) -> [CellBonus; BOARD_SIZE] {
    let mut grid = [CellBonus::default(); BOARD_SIZE];

    for (cell, idx) in arrangement.occupied() {
        if !scorer.open[cell] {
            continue;
        }
        let item = &scorer.pool[idx as usize];
        if !item.has_radius() {
            continue;
        }
        for &t in scorer.radius_table.targets(item.boost_radius, cell) {
            let bonus = &mut grid[t as usize];
            bonus.build_pct += item.build_boost;
            bonus.flaggy_pct += item.flaggy_boost;
            bonus.exp_boost += item.exp_boost;
            bonus.flag_boost += item.flag_boost;
        }
    }
    grid
}

#[inline(always)]
fn boosted(rate: f64, pct: f64) -> f64 {
    rate + (rate * pct / 100.0).ceil()
}

/// Pass 2: fold the bonus grid into the layout totals.
pub fn compute_metrics(scorer: &Scorer, arrangement: &Arrangement) -> Metrics {
    let grid = propagate(scorer, arrangement);
    let mut metrics = Metrics::default();
    let mut flaggy = 0.0;

    for (cell, idx) in arrangement.occupied() {
        if !scorer.open[cell] {
            continue;
        }
        let item = &scorer.pool[idx as usize];
        let bonus = &grid[cell];

        metrics.build_rate += boosted(item.build_rate, bonus.build_pct);
        flaggy += boosted(item.flaggy_rate, bonus.flaggy_pct);
        if item.is_player {
            metrics.exp_bonus += bonus.exp_boost;
        }
        metrics.exp_bonus += item.exp_bonus;
    }

    for &cell in &scorer.flag_cells {
        metrics.flag_boost += grid[cell].flag_boost;
    }

    let multiplier = 1.0 + scorer.shop_flaggy_upgrades as f64 * 0.5;
    metrics.flaggy_rate = (flaggy * multiplier).floor();
    metrics
}
