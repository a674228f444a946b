use super::{BoostRadius, Inventory, Item};
use crate::error::{CfResult, CogForgeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// JSON shape handed over by the save parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub items: Vec<ItemRecord>,
    pub blocked_slots: Vec<u32>,
    /// Flag markers; these slots are blocked as well.
    pub flag_positions: Vec<u32>,
    pub shop_flaggy_upgrades: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemRecord {
    pub key: u32,
    /// Defaults to `key`.
    pub id: Option<u32>,
    pub icon: String,
    pub build_rate: f64,
    pub exp_gain: f64,
    pub flaggy_rate: f64,
    pub exp_bonus: f64,
    pub boost_radius: BoostRadius,
    pub build_boost: f64,
    pub flaggy_boost: f64,
    pub exp_boost: f64,
    pub flag_boost: f64,
    /// Defaults to `expGain > 0`.
    pub is_player: Option<bool>,
    /// Defaults to true for `everything` items.
    pub fixed: Option<bool>,
}

impl ItemRecord {
    pub fn into_item(self) -> Item {
        Item {
            id: self.id.unwrap_or(self.key),
            is_player: self.is_player.unwrap_or(self.exp_gain > 0.0),
            fixed: self
                .fixed
                .unwrap_or(self.boost_radius == BoostRadius::Everything),
            icon: self.icon,
            build_rate: self.build_rate,
            exp_gain: self.exp_gain,
            flaggy_rate: self.flaggy_rate,
            exp_bonus: self.exp_bonus,
            boost_radius: self.boost_radius,
            build_boost: self.build_boost,
            flaggy_boost: self.flaggy_boost,
            exp_boost: self.exp_boost,
            flag_boost: self.flag_boost,
        }
    }

    pub fn from_item(key: u32, item: &Item) -> Self {
        Self {
            key,
            id: Some(item.id),
            icon: item.icon.clone(),
            build_rate: item.build_rate,
            exp_gain: item.exp_gain,
            flaggy_rate: item.flaggy_rate,
            exp_bonus: item.exp_bonus,
            boost_radius: item.boost_radius,
            build_boost: item.build_boost,
            flaggy_boost: item.flaggy_boost,
            exp_boost: item.exp_boost,
            flag_boost: item.flag_boost,
            is_player: Some(item.is_player),
            fixed: Some(item.fixed),
        }
    }
}

impl Inventory {
    pub fn from_snapshot(snapshot: InventorySnapshot) -> CfResult<Self> {
        let mut inv = Inventory::new();

        for key in snapshot.blocked_slots {
            inv.block_slot(key)?;
        }
        for key in snapshot.flag_positions {
            inv.add_flag(key)?;
        }
        inv.set_shop_flaggy_upgrades(snapshot.shop_flaggy_upgrades);

        let mut seen = BTreeSet::new();
        for record in snapshot.items {
            if !seen.insert(record.key) {
                return Err(CogForgeError::Validation(format!(
                    "key {} appears more than once",
                    record.key
                )));
            }
            inv.place(record.key, record.into_item())?;
        }

        debug!(
            "Loaded inventory: {} items, {} flags, {} shop upgrades",
            inv.len(),
            inv.flag_positions().len(),
            inv.shop_flaggy_upgrades()
        );
        Ok(inv)
    }

    pub fn to_snapshot(&self) -> InventorySnapshot {
        let flags = self.flag_positions().to_vec();
        InventorySnapshot {
            items: self
                .items()
                .map(|(k, it)| ItemRecord::from_item(k, it))
                .collect(),
            blocked_slots: self
                .blocked_board_keys()
                .into_iter()
                .filter(|k| !flags.contains(k))
                .collect(),
            flag_positions: flags,
            shop_flaggy_upgrades: self.shop_flaggy_upgrades(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: InventorySnapshot = serde_json::from_str(&content)?;
        Self::from_snapshot(snapshot)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> CfResult<()> {
        let json = serde_json::to_string_pretty(&self.to_snapshot())?;
        fs::write(path, json)?;
        Ok(())
    }
}
