use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const BOARD_ROWS: usize = 8;
pub const BOARD_COLS: usize = 12;
pub const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// First key of the build queue (12 slots, 3 per row).
pub const BUILD_QUEUE_START: u32 = 96;
/// First key of spare storage (unbounded, 3 per row).
pub const SPARE_START: u32 = 108;
pub const STORAGE_COLS: u32 = 3;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Zone {
    Board,
    BuildQueue,
    Spare,
}

impl Zone {
    pub fn of_key(key: u32) -> Self {
        if key < BUILD_QUEUE_START {
            Zone::Board
        } else if key < SPARE_START {
            Zone::BuildQueue
        } else {
            Zone::Spare
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub zone: Zone,
    pub x: u32, // column within the zone
    pub y: u32, // row within the zone
}

impl Position {
    pub fn from_key(key: u32) -> Self {
        let zone = Zone::of_key(key);
        let (offset, per_row) = match zone {
            Zone::Board => (0, BOARD_COLS as u32),
            Zone::BuildQueue => (BUILD_QUEUE_START, STORAGE_COLS),
            Zone::Spare => (SPARE_START, STORAGE_COLS),
        };
        let local = key - offset;
        Self {
            zone,
            x: local % per_row,
            y: local / per_row,
        }
    }
}

#[inline(always)]
pub fn is_board_key(key: u32) -> bool {
    (key as usize) < BOARD_SIZE
}

/// (row, col) of a board cell.
#[inline(always)]
pub fn cell_coords(cell: usize) -> (usize, usize) {
    (cell / BOARD_COLS, cell % BOARD_COLS)
}

/// Bounds-checked lookup: coordinates off the board yield `None`.
#[inline(always)]
pub fn cell_index(row: i32, col: i32) -> Option<usize> {
    if row < 0 || col < 0 || row >= BOARD_ROWS as i32 || col >= BOARD_COLS as i32 {
        return None;
    }
    Some(row as usize * BOARD_COLS + col as usize)
}
