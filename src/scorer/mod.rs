pub mod engine;
pub mod radius;
pub mod types;

pub use self::radius::RadiusTable;
pub use self::types::{Metrics, ScoreBreakdown};

use crate::config::ScoringWeights;
use crate::core_types::{Arrangement, PoolIndex};
use crate::geometry::{is_board_key, BOARD_SIZE};
use crate::inventory::{Inventory, Item};

/// Objective function over arrangements of one inventory's board items.
///
/// The pool is a copy of every item on an open board cell, in key order, so a
/// run never reads the inventory it was built from.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub pool: Vec<Item>,
    /// Board key each pool item was copied from.
    pub origin_keys: Vec<u32>,
    pub open: [bool; BOARD_SIZE],
    pub flag_cells: Vec<usize>,
    pub shop_flaggy_upgrades: u32,
    pub radius_table: RadiusTable,
    current: Arrangement,
}

impl Scorer {
    pub fn new(inventory: &Inventory) -> Self {
        let mut open = [false; BOARD_SIZE];
        for key in inventory.open_board_keys() {
            open[key as usize] = true;
        }

        let mut pool = Vec::new();
        let mut origin_keys = Vec::new();
        let mut current = Arrangement::empty();
        for (key, item) in inventory.items() {
            if !is_board_key(key) || !open[key as usize] {
                continue;
            }
            current.set(key as usize, Some(pool.len() as PoolIndex));
            pool.push(item.clone());
            origin_keys.push(key);
        }

        let flag_cells = inventory
            .flag_positions()
            .iter()
            .filter(|&&k| is_board_key(k))
            .map(|&k| k as usize)
            .collect();

        Self {
            pool,
            origin_keys,
            open,
            flag_cells,
            shop_flaggy_upgrades: inventory.shop_flaggy_upgrades(),
            radius_table: RadiusTable::build(),
            current,
        }
    }

    /// The inventory's layout expressed over the pool.
    pub fn current_arrangement(&self) -> &Arrangement {
        &self.current
    }

    pub fn metrics(&self, arrangement: &Arrangement) -> Metrics {
        engine::compute_metrics(self, arrangement)
    }

    pub fn score(&self, arrangement: &Arrangement, weights: &ScoringWeights) -> ScoreBreakdown {
        self.metrics(arrangement).weighted(weights)
    }

    /// Pool indices the optimizer may relocate.
    pub fn movable_items(&self) -> Vec<PoolIndex> {
        (0..self.pool.len())
            .filter(|&i| !self.pool[i].fixed)
            .map(|i| i as PoolIndex)
            .collect()
    }

    /// Per-cell pins: the fixed item occupying a cell, if any.
    pub fn pinned(&self) -> Vec<Option<PoolIndex>> {
        self.current
            .cells()
            .iter()
            .map(|slot| slot.filter(|&idx| self.pool[idx as usize].fixed))
            .collect()
    }

    /// Open cells not pinned by a fixed item, row-major.
    pub fn free_cells(&self) -> Vec<usize> {
        let pinned = self.pinned();
        (0..BOARD_SIZE)
            .filter(|&c| self.open[c] && pinned[c].is_none())
            .collect()
    }

    /// Empty board except for the pinned items.
    pub fn pinned_arrangement(&self) -> Arrangement {
        let mut base = Arrangement::empty();
        for (cell, pin) in self.pinned().into_iter().enumerate() {
            base.set(cell, pin);
        }
        base
    }
}
