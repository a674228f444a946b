#![allow(dead_code)] // Not every test file uses every helper

use cogforge::core_types::Arrangement;
use cogforge::geometry::BOARD_COLS;
use cogforge::inventory::{BoostRadius, Inventory, Item};
use cogforge::scorer::Scorer;

/// Builder for Item to clean up tests
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            item: Item::new(id, format!("cog_{}", id)),
        }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.item.icon = icon.to_string();
        self
    }

    pub fn build_rate(mut self, rate: f64) -> Self {
        self.item.build_rate = rate;
        self
    }

    pub fn flaggy(mut self, rate: f64) -> Self {
        self.item.flaggy_rate = rate;
        self
    }

    pub fn exp_bonus(mut self, bonus: f64) -> Self {
        self.item.exp_bonus = bonus;
        self
    }

    pub fn radius(mut self, radius: BoostRadius) -> Self {
        self.item.boost_radius = radius;
        self
    }

    pub fn build_boost(mut self, pct: f64) -> Self {
        self.item.build_boost = pct;
        self
    }

    pub fn flaggy_boost(mut self, pct: f64) -> Self {
        self.item.flaggy_boost = pct;
        self
    }

    pub fn exp_boost(mut self, amount: f64) -> Self {
        self.item.exp_boost = amount;
        self
    }

    pub fn flag_boost(mut self, amount: f64) -> Self {
        self.item.flag_boost = amount;
        self
    }

    pub fn player(mut self) -> Self {
        self.item.is_player = true;
        self.item.exp_gain = 1.0;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.item.fixed = true;
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

pub fn key(row: usize, col: usize) -> u32 {
    (row * BOARD_COLS + col) as u32
}

/// A board with a mix of boosters, plain cogs, a player, a fixed cog and
/// some blocked slots.
pub fn mixed_inventory() -> Inventory {
    let mut inv = Inventory::new();
    inv.block_slot(key(0, 0)).unwrap();
    inv.block_slot(key(7, 11)).unwrap();
    inv.add_flag(key(4, 6)).unwrap();
    inv.set_shop_flaggy_upgrades(1);

    let radii = [
        BoostRadius::Adjacent,
        BoostRadius::Diagonal,
        BoostRadius::Up,
        BoostRadius::Down,
        BoostRadius::Left,
        BoostRadius::Right,
        BoostRadius::Row,
        BoostRadius::Column,
        BoostRadius::Corner,
        BoostRadius::Around,
    ];
    for (i, radius) in radii.iter().enumerate() {
        let item = ItemBuilder::new(i as u32)
            .icon(&format!("boost_{}", radius))
            .build_rate(2.0 + i as f64)
            .radius(*radius)
            .build_boost(10.0 + i as f64)
            .flaggy_boost(5.0)
            .exp_boost(0.5)
            .flag_boost(1.0)
            .build();
        inv.place(key(1 + i / 5, i % 5), item).unwrap();
    }
    for i in 0..12 {
        let item = ItemBuilder::new(100 + i)
            .icon(&format!("plain_{}", i % 3))
            .build_rate(10.0 + (i % 3) as f64)
            .flaggy(3.0)
            .exp_bonus(0.25)
            .build();
        inv.place(key(5 + (i as usize) / 6, (i as usize) % 6), item).unwrap();
    }
    inv.place(key(3, 9), ItemBuilder::new(200).icon("player").player().build())
        .unwrap();
    inv.place(
        key(7, 0),
        ItemBuilder::new(300)
            .icon("anchor")
            .radius(BoostRadius::Everything)
            .build_boost(3.0)
            .fixed()
            .build(),
    )
    .unwrap();
    inv
}

/// Reads back `inventory`'s board as an arrangement over `scorer`'s pool,
/// identifying items by id.
pub fn arrangement_of(inventory: &Inventory, scorer: &Scorer) -> Arrangement {
    let mut arr = Arrangement::empty();
    for (k, item) in inventory.items() {
        if (k as usize) < cogforge::geometry::BOARD_SIZE {
            let idx = scorer.pool.iter().position(|p| p.id == item.id).unwrap();
            arr.set(k as usize, Some(idx as u16));
        }
    }
    arr
}
