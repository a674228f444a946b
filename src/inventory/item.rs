use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Spatial rule deciding which cells receive an item's radius boosts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BoostRadius {
    #[default]
    None,
    Diagonal,
    Adjacent,
    Up,
    Down,
    Left,
    Right,
    Row,
    Column,
    Corner,
    Around,
    Everything,
}

impl BoostRadius {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A placeable cog (or player) with direct and radius-propagated bonuses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Stable identity; survives moves.
    pub id: u32,
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

    pub is_player: bool,
    pub fixed: bool,
}

/// Tolerance used when comparing production values of copied items.
pub const MATCH_EPSILON: f64 = 1e-2;

impl Item {
    pub fn new(id: u32, icon: impl Into<String>) -> Self {
        Self {
            id,
            icon: icon.into(),
            ..Default::default()
        }
    }

    pub fn has_radius(&self) -> bool {
        self.boost_radius != BoostRadius::None
    }

    /// Same category and production values within `MATCH_EPSILON`.
    pub fn same_attributes(&self, other: &Item) -> bool {
        self.icon == other.icon
            && (self.build_rate - other.build_rate).abs() < MATCH_EPSILON
            && (self.exp_bonus - other.exp_bonus).abs() < MATCH_EPSILON
            && (self.flaggy_rate - other.flaggy_rate).abs() < MATCH_EPSILON
    }
}
