pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod runner;
pub mod selection;

pub use self::runner::{
    GeneticOptimizer, NoProgress, OptimizationOptions, OptimizationResult, ProgressCallback,
};

use crate::core_types::{Arrangement, PoolIndex};
use crate::geometry::BOARD_SIZE;
use crate::scorer::{ScoreBreakdown, Scorer};
use serde::{Deserialize, Serialize};

/// A population member: an owned arrangement plus its cached score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub arrangement: Arrangement,
    pub breakdown: ScoreBreakdown,
}

impl Solution {
    #[inline(always)]
    pub fn fitness(&self) -> f64 {
        self.breakdown.total
    }
}

/// The cells and items a search may shuffle. Pinned (fixed) items live in
/// `base` and never move; blocked cells are never free.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    pub base: Arrangement,
    pub free_cells: Vec<usize>,
    pub movable: Vec<PoolIndex>,
    is_free: Vec<bool>,
    is_movable: Vec<bool>,
}

impl SearchSpace {
    pub fn from_scorer(scorer: &Scorer) -> Self {
        let free_cells = scorer.free_cells();
        let movable = scorer.movable_items();

        let mut is_free = vec![false; BOARD_SIZE];
        for &c in &free_cells {
            is_free[c] = true;
        }
        let mut is_movable = vec![false; scorer.pool.len()];
        for &i in &movable {
            is_movable[i as usize] = true;
        }

        Self {
            base: scorer.pinned_arrangement(),
            free_cells,
            movable,
            is_free,
            is_movable,
        }
    }

    pub fn pool_len(&self) -> usize {
        self.is_movable.len()
    }

    #[inline(always)]
    pub fn is_free(&self, cell: usize) -> bool {
        self.is_free[cell]
    }

    #[inline(always)]
    pub fn is_movable(&self, idx: PoolIndex) -> bool {
        self.is_movable.get(idx as usize).copied().unwrap_or(false)
    }

    /// True when `candidate` keeps every pin and holds each movable item
    /// exactly once, on free cells only.
    pub fn admits(&self, candidate: &Arrangement) -> bool {
        let mut placed = vec![false; self.pool_len()];
        let mut count = 0;

        for cell in 0..BOARD_SIZE {
            let slot = candidate.get(cell);
            if !self.is_free(cell) {
                if slot != self.base.get(cell) {
                    return false;
                }
                continue;
            }
            if let Some(idx) = slot {
                if !self.is_movable(idx) || placed[idx as usize] {
                    return false;
                }
                placed[idx as usize] = true;
                count += 1;
            }
        }
        count == self.movable.len()
    }
}
