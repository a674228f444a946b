use super::SearchSpace;
use crate::core_types::{Arrangement, PoolIndex};
use crate::geometry::{BOARD_COLS, BOARD_ROWS};
use fastrand::Rng;

/// Row-split crossover at a random row in `[1, rows - 1]`.
pub fn crossover(a: &Arrangement, b: &Arrangement, space: &SearchSpace, rng: &mut Rng) -> Arrangement {
    let split_row = rng.usize(1..BOARD_ROWS);
    crossover_rows(a, b, space, split_row)
}

/// Free cells above `split_row` inherit from `a`, the rest from `b`.
///
/// Conservation of mass: an item already placed is skipped, and anything
/// left over is dealt into the remaining empty free cells (row-major) in the
/// order it appears in `b`. Pins come from `space.base`.
pub fn crossover_rows(
    a: &Arrangement,
    b: &Arrangement,
    space: &SearchSpace,
    split_row: usize,
) -> Arrangement {
    let split_cell = split_row * BOARD_COLS;
    let mut child = space.base.clone();
    let mut placed = vec![false; space.pool_len()];

    // 1. Inherit
    for &cell in &space.free_cells {
        let parent = if cell < split_cell { a } else { b };
        if let Some(idx) = parent.get(cell) {
            if space.is_movable(idx) && !placed[idx as usize] {
                child.set(cell, Some(idx));
                placed[idx as usize] = true;
            }
        }
    }

    // 2. Repair
    let mut empty = space
        .free_cells
        .iter()
        .copied()
        .filter(|&c| child.get(c).is_none())
        .collect::<Vec<_>>()
        .into_iter();

    let order = b
        .occupied()
        .map(|(_, idx)| idx)
        .chain(space.movable.iter().copied())
        .collect::<Vec<PoolIndex>>();

    for idx in order {
        if !space.is_movable(idx) || placed[idx as usize] {
            continue;
        }
        match empty.next() {
            Some(cell) => {
                child.set(cell, Some(idx));
                placed[idx as usize] = true;
            }
            None => break,
        }
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Inventory, Item};
    use crate::scorer::Scorer;

    fn space_with(keys: &[u32]) -> (Scorer, SearchSpace) {
        let mut inv = Inventory::new();
        for &k in keys {
            inv.place(k, Item::new(k, format!("cog_{}", k))).unwrap();
        }
        let scorer = Scorer::new(&inv);
        let space = SearchSpace::from_scorer(&scorer);
        (scorer, space)
    }

    #[test]
    fn test_rows_above_split_come_from_first_parent() {
        let (scorer, space) = space_with(&[0, 1, 12]);
        let a = scorer.current_arrangement().clone();
        let mut b = Arrangement::empty();
        b.set(1, Some(2));
        b.set(13, Some(0));
        b.set(14, Some(1));

        let child = crossover_rows(&a, &b, &space, 1);
        // Row 0 from `a`. Everything `b` holds below the split is already
        // placed, so idx 2 is dealt into the first gap.
        assert_eq!(child.get(0), Some(0));
        assert_eq!(child.get(1), Some(1));
        assert_eq!(child.get(2), Some(2));
        assert!(space.admits(&child));
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let (scorer, space) = space_with(&[0, 12]);
        let a = scorer.current_arrangement().clone();
        let mut b = Arrangement::empty();
        b.set(12, Some(0));
        b.set(13, Some(1));

        // idx 0 already taken from `a` at cell 0; cell 12 stays free until
        // idx 1 arrives from cell 13.
        let child = crossover_rows(&a, &b, &space, 1);
        assert_eq!(child.get(0), Some(0));
        assert_eq!(child.get(12), None);
        assert_eq!(child.get(13), Some(1));
        assert_eq!(child.occupied_count(), 2);
    }
}
