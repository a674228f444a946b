pub mod item;
pub mod snapshot;

pub use self::item::{BoostRadius, Item, MATCH_EPSILON};
pub use self::snapshot::{InventorySnapshot, ItemRecord};

use crate::config::ScoringWeights;
use crate::error::{CfResult, CogForgeError};
use crate::geometry::{is_board_key, BOARD_SIZE};
use crate::scorer::{Metrics, ScoreBreakdown, Scorer};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::BTreeMap;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SlotState {
    #[default]
    Open,
    Blocked,
    /// Blocked, and collects flag boosts.
    Flag,
}

/// The user's board plus storage zones.
///
/// Items live in a sparse map keyed by slot; a missing key is an empty slot.
/// Only `move_item` relocates items once the inventory is assembled, and
/// every move drops the cached metrics.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: BTreeMap<u32, Item>,
    slots: BTreeMap<u32, SlotState>,
    flag_positions: Vec<u32>,
    shop_flaggy_upgrades: u32,
    metrics: OnceCell<Metrics>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, key: u32, item: Item) -> CfResult<()> {
        if self.slot_state(key) != SlotState::Open {
            return Err(CogForgeError::Validation(format!(
                "slot {} is blocked and cannot hold '{}'",
                key, item.icon
            )));
        }
        if self.items.contains_key(&key) {
            return Err(CogForgeError::Validation(format!(
                "slot {} already holds an item",
                key
            )));
        }
        self.items.insert(key, item);
        self.metrics.take();
        Ok(())
    }

    pub fn block_slot(&mut self, key: u32) -> CfResult<()> {
        self.set_slot(key, SlotState::Blocked)
    }

    pub fn add_flag(&mut self, key: u32) -> CfResult<()> {
        self.set_slot(key, SlotState::Flag)?;
        if !self.flag_positions.contains(&key) {
            self.flag_positions.push(key);
        }
        Ok(())
    }

    fn set_slot(&mut self, key: u32, state: SlotState) -> CfResult<()> {
        if !is_board_key(key) {
            return Err(CogForgeError::Validation(format!(
                "only board slots can be blocked, got key {}",
                key
            )));
        }
        if self.items.contains_key(&key) {
            return Err(CogForgeError::Validation(format!(
                "slot {} holds an item and cannot be blocked",
                key
            )));
        }
        self.slots.insert(key, state);
        if state != SlotState::Flag {
            self.flag_positions.retain(|&k| k != key);
        }
        self.metrics.take();
        Ok(())
    }

    pub fn set_shop_flaggy_upgrades(&mut self, upgrades: u32) {
        self.shop_flaggy_upgrades = upgrades;
        self.metrics.take();
    }

    pub fn shop_flaggy_upgrades(&self) -> u32 {
        self.shop_flaggy_upgrades
    }

    pub fn get(&self, key: u32) -> Option<&Item> {
        self.items.get(&key)
    }

    pub fn items(&self) -> impl Iterator<Item = (u32, &Item)> {
        self.items.iter().map(|(&k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn slot_state(&self, key: u32) -> SlotState {
        self.slots.get(&key).copied().unwrap_or_default()
    }

    pub fn is_blocked(&self, key: u32) -> bool {
        self.slot_state(key) != SlotState::Open
    }

    pub fn is_fixed(&self, key: u32) -> bool {
        self.items.get(&key).is_some_and(|it| it.fixed)
    }

    pub fn flag_positions(&self) -> &[u32] {
        &self.flag_positions
    }

    /// Board keys that may hold an item.
    pub fn open_board_keys(&self) -> Vec<u32> {
        (0..BOARD_SIZE as u32)
            .filter(|&k| !self.is_blocked(k))
            .collect()
    }

    pub fn blocked_board_keys(&self) -> Vec<u32> {
        self.slots.keys().copied().collect()
    }

    /// Open board keys not pinned by a fixed item.
    pub fn movable_board_keys(&self) -> Vec<u32> {
        (0..BOARD_SIZE as u32)
            .filter(|&k| !self.is_blocked(k) && !self.is_fixed(k))
            .collect()
    }

    /// Non-fixed items sitting on open board cells.
    pub fn movable_items(&self) -> Vec<(u32, &Item)> {
        self.items()
            .filter(|&(k, it)| is_board_key(k) && !it.fixed && !self.is_blocked(k))
            .collect()
    }

    pub fn check_move(&self, from: u32, to: u32) -> CfResult<()> {
        let reject = |reason: String| {
            Err(CogForgeError::InvalidMove {
                from,
                to,
                reason,
            })
        };

        if !self.items.contains_key(&from) {
            return reject(format!("no item at key {}", from));
        }
        for key in [from, to] {
            match self.slot_state(key) {
                SlotState::Open => {}
                state => return reject(format!("slot {} is {}", key, state)),
            }
            if self.is_fixed(key) {
                return reject(format!("slot {} holds a fixed item", key));
            }
        }
        Ok(())
    }

    /// Swaps the contents of `from` and `to`. Validation happens before any
    /// state changes.
    pub fn move_item(&mut self, from: u32, to: u32) -> CfResult<()> {
        self.check_move(from, to)?;
        if from == to {
            return Ok(());
        }

        let source = self.items.remove(&from);
        let dest = self.items.remove(&to);
        if let Some(item) = source {
            self.items.insert(to, item);
        }
        if let Some(item) = dest {
            self.items.insert(from, item);
        }
        self.metrics.take();
        Ok(())
    }

    /// Raw (weight-independent) metrics of the current layout, cached until
    /// the next move.
    pub fn metrics(&self) -> Metrics {
        *self.metrics.get_or_init(|| {
            let scorer = Scorer::new(self);
            scorer.metrics(scorer.current_arrangement())
        })
    }

    pub fn score(&self, weights: &ScoringWeights) -> ScoreBreakdown {
        self.metrics().weighted(weights)
    }
}
