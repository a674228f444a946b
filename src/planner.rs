use crate::core_types::Arrangement;
use crate::error::{CfResult, CogForgeError};
use crate::geometry::is_board_key;
use crate::inventory::{Inventory, Item};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Swap the contents of two board keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: u32,
    pub to: u32,
}

/// Ordered moves; applying them in order reproduces the planned arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    pub moves: Vec<Move>,
}

impl MovePlan {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// All-or-nothing: the plan runs on a scratch copy and only replaces
    /// `inventory` once every move has been accepted.
    pub fn apply(&self, inventory: &mut Inventory) -> CfResult<()> {
        let mut scratch = inventory.clone();
        for m in &self.moves {
            scratch.move_item(m.from, m.to)?;
        }
        *inventory = scratch;
        Ok(())
    }
}

/// Original board items that the planner may claim, in key order.
fn board_items(inventory: &Inventory) -> Vec<(u32, &Item)> {
    inventory
        .items()
        .filter(|&(k, _)| is_board_key(k) && !inventory.is_blocked(k))
        .collect()
}

/// Pairs each placed pool item with an original slot. Identity matches go
/// first so a look-alike never steals a slot another item owns.
fn match_items(
    originals: &[(u32, &Item)],
    pool: &[Item],
    target: &Arrangement,
) -> CfResult<Vec<(u32, usize)>> {
    let placed: Vec<(u32, &Item)> = target
        .occupied()
        .map(|(cell, idx)| {
            pool.get(idx as usize)
                .map(|item| (cell as u32, item))
                .ok_or_else(|| CogForgeError::UnmatchedItem {
                    icon: format!("pool #{}", idx),
                    target: cell as u32,
                })
        })
        .collect::<CfResult<_>>()?;

    let mut claimed = vec![false; originals.len()];
    let mut matched: Vec<Option<usize>> = vec![None; placed.len()];

    for (p, &(_, item)) in placed.iter().enumerate() {
        let hit = originals.iter().enumerate().position(|(slot, &(_, orig))| {
            !claimed[slot] && orig.id == item.id && orig.same_attributes(item)
        });
        if let Some(slot) = hit {
            claimed[slot] = true;
            matched[p] = Some(slot);
        }
    }

    for (p, &(cell, item)) in placed.iter().enumerate() {
        if matched[p].is_some() {
            continue;
        }
        let hit = originals.iter().enumerate().position(|(slot, &(_, orig))| {
            !claimed[slot] && orig.fixed == item.fixed && orig.same_attributes(item)
        });
        match hit {
            Some(slot) => {
                claimed[slot] = true;
                matched[p] = Some(slot);
            }
            None => {
                return Err(CogForgeError::UnmatchedItem {
                    icon: item.icon.clone(),
                    target: cell,
                })
            }
        }
    }

    if let Some(slot) = claimed.iter().position(|&c| !c) {
        return Err(CogForgeError::OrphanedItem {
            key: originals[slot].0,
        });
    }

    Ok(placed
        .iter()
        .zip(matched)
        .filter_map(|(&(cell, _), slot)| slot.map(|s| (cell, s)))
        .collect())
}

/// Plans the moves that turn `inventory`'s board into `target`.
///
/// `pool` is the item list `target` indexes into (the scorer's copy). Cells
/// are settled in ascending key order; each step swaps the wanted item in,
/// so chains and cycles need at most one move per misplaced item and no
/// holding slot.
pub fn plan_moves(inventory: &Inventory, pool: &[Item], target: &Arrangement) -> CfResult<MovePlan> {
    let originals = board_items(inventory);
    let pairs = match_items(&originals, pool, target)?;

    // target cell -> original key of the item wanted there
    let mut wanted: BTreeMap<u32, u32> = BTreeMap::new();
    for (cell, slot) in pairs {
        let (origin, item) = originals[slot];
        if inventory.is_blocked(cell) {
            return Err(CogForgeError::InvalidMove {
                from: origin,
                to: cell,
                reason: format!("slot {} is blocked", cell),
            });
        }
        if origin != cell {
            if item.fixed {
                return Err(CogForgeError::InvalidMove {
                    from: origin,
                    to: cell,
                    reason: format!("'{}' is fixed", item.icon),
                });
            }
            if inventory.is_fixed(cell) {
                return Err(CogForgeError::InvalidMove {
                    from: origin,
                    to: cell,
                    reason: format!("slot {} holds a fixed item", cell),
                });
            }
        }
        wanted.insert(cell, origin);
    }

    // Simulation over original keys: cell -> occupant, occupant -> cell.
    let mut occupant: BTreeMap<u32, u32> = originals.iter().map(|&(k, _)| (k, k)).collect();
    let mut location: BTreeMap<u32, u32> = occupant.clone();
    let mut moves = Vec::new();

    for (&cell, &origin) in &wanted {
        if occupant.get(&cell) == Some(&origin) {
            continue;
        }
        let Some(&from) = location.get(&origin) else {
            return Err(CogForgeError::OrphanedItem { key: origin });
        };

        moves.push(Move { from, to: cell });

        let displaced = occupant.insert(cell, origin);
        location.insert(origin, cell);
        match displaced {
            Some(other) => {
                occupant.insert(from, other);
                location.insert(other, from);
            }
            None => {
                occupant.remove(&from);
            }
        }
    }

    debug!("Planned {} moves for {} placed items", moves.len(), wanted.len());
    Ok(MovePlan { moves })
}
