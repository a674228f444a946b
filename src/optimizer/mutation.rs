use super::SearchSpace;
use crate::core_types::Arrangement;
use fastrand::Rng;

/// Swaps the contents of two distinct free cells (either may be empty).
/// Returns false when there is nothing to swap.
pub fn swap_mutation(arrangement: &mut Arrangement, space: &SearchSpace, rng: &mut Rng) -> bool {
    let n = space.free_cells.len();
    if n < 2 {
        return false;
    }

    let i = rng.usize(0..n);
    let mut j = rng.usize(0..n - 1);
    if j >= i {
        j += 1;
    }
    arrangement.swap(space.free_cells[i], space.free_cells[j]);
    true
}
