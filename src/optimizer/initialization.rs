use super::SearchSpace;
use crate::core_types::Arrangement;
use fastrand::Rng;

/// Fisher-Yates shuffle of the movable items, dealt into the free cells in
/// row-major order. Surplus cells stay empty.
pub fn random_arrangement(space: &SearchSpace, rng: &mut Rng) -> Arrangement {
    let mut items = space.movable.clone();
    rng.shuffle(&mut items);

    let mut arrangement = space.base.clone();
    for (&cell, idx) in space.free_cells.iter().zip(items) {
        arrangement.set(cell, Some(idx));
    }
    arrangement
}
