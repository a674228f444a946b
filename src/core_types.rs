use crate::error::{CfResult, CogForgeError};
use crate::geometry::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// Index into a scorer's item pool.
pub type PoolIndex = u16;

/// One candidate board: a row-major cell vector of pool indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrangement {
    cells: Vec<Option<PoolIndex>>,
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::empty()
    }
}

impl Arrangement {
    pub fn empty() -> Self {
        Self {
            cells: vec![None; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: Vec<Option<PoolIndex>>) -> CfResult<Self> {
        if cells.len() != BOARD_SIZE {
            return Err(CogForgeError::Validation(format!(
                "arrangement needs {} cells, got {}",
                BOARD_SIZE,
                cells.len()
            )));
        }
        Ok(Self { cells })
    }

    #[inline(always)]
    pub fn get(&self, cell: usize) -> Option<PoolIndex> {
        self.cells[cell]
    }

    #[inline(always)]
    pub fn set(&mut self, cell: usize, value: Option<PoolIndex>) {
        self.cells[cell] = value;
    }

    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    pub fn cells(&self) -> &[Option<PoolIndex>] {
        &self.cells
    }

    pub fn occupied(&self) -> impl Iterator<Item = (usize, PoolIndex)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(cell, slot)| slot.map(|idx| (cell, idx)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Cell currently holding `idx`, if any.
    pub fn position_of(&self, idx: PoolIndex) -> Option<usize> {
        self.cells.iter().position(|&c| c == Some(idx))
    }
}
