use crate::geometry::{cell_coords, cell_index, BOARD_COLS, BOARD_ROWS, BOARD_SIZE};
use crate::inventory::BoostRadius;
use strum::{EnumCount, IntoEnumIterator};

/// Signed (row, col) targets of a pattern centred on (i, j). May fall off
/// the board.
pub fn raw_targets(radius: BoostRadius, i: i32, j: i32) -> Vec<(i32, i32)> {
    let rows = BOARD_ROWS as i32;
    let cols = BOARD_COLS as i32;

    let block = |dr: std::ops::RangeInclusive<i32>, dc: std::ops::RangeInclusive<i32>| {
        dr.flat_map(|r| dc.clone().map(move |c| (i + r, j + c)))
            .collect::<Vec<_>>()
    };

    match radius {
        BoostRadius::None => Vec::new(),
        BoostRadius::Diagonal => vec![(i - 1, j - 1), (i - 1, j + 1), (i + 1, j - 1), (i + 1, j + 1)],
        BoostRadius::Adjacent => vec![(i - 1, j), (i, j + 1), (i + 1, j), (i, j - 1)],
        BoostRadius::Up => block(-2..=-1, -1..=1),
        BoostRadius::Down => block(1..=2, -1..=1),
        BoostRadius::Left => block(-1..=1, -2..=-1),
        BoostRadius::Right => block(-1..=1, 1..=2),
        BoostRadius::Row => (0..cols).filter(|&k| k != j).map(|k| (i, k)).collect(),
        BoostRadius::Column => (0..rows).filter(|&k| k != i).map(|k| (k, j)).collect(),
        BoostRadius::Corner => vec![(i - 2, j - 2), (i - 2, j + 2), (i + 2, j - 2), (i + 2, j + 2)],
        BoostRadius::Around => vec![
            (i - 2, j),
            (i - 1, j - 1),
            (i - 1, j),
            (i - 1, j + 1),
            (i, j - 2),
            (i, j - 1),
            (i, j + 1),
            (i, j + 2),
            (i + 1, j - 1),
            (i + 1, j),
            (i + 1, j + 1),
            (i + 2, j),
        ],
        BoostRadius::Everything => (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .filter(|&(r, c)| r != i || c != j)
            .collect(),
    }
}

/// Board cells reached by a pattern placed at `cell`, clipped to the grid.
pub fn targets(radius: BoostRadius, cell: usize) -> Vec<usize> {
    let (row, col) = cell_coords(cell);
    raw_targets(radius, row as i32, col as i32)
        .into_iter()
        .filter_map(|(r, c)| cell_index(r, c))
        .collect()
}

/// Precomputed targets for every (pattern, cell) pair, stored flat.
#[derive(Debug, Clone)]
pub struct RadiusTable {
    starts: Vec<usize>,
    cells: Vec<u8>,
}

impl RadiusTable {
    pub fn build() -> Self {
        let mut starts = Vec::with_capacity(BoostRadius::COUNT * BOARD_SIZE + 1);
        let mut cells = Vec::new();

        for radius in BoostRadius::iter() {
            for cell in 0..BOARD_SIZE {
                starts.push(cells.len());
                cells.extend(targets(radius, cell).into_iter().map(|t| t as u8));
            }
        }
        starts.push(cells.len());

        Self { starts, cells }
    }

    #[inline(always)]
    pub fn targets(&self, radius: BoostRadius, cell: usize) -> &[u8] {
        let slot = radius.index() * BOARD_SIZE + cell;
        &self.cells[self.starts[slot]..self.starts[slot + 1]]
    }
}

impl Default for RadiusTable {
    fn default() -> Self {
        Self::build()
    }
}
