use super::Solution;
use fastrand::Rng;

/// Draws `size` members with replacement and keeps the fittest.
/// `population` must not be empty.
pub fn tournament<'a>(population: &'a [Solution], size: usize, rng: &mut Rng) -> &'a Solution {
    let n = population.len();
    let mut best = &population[rng.usize(0..n)];
    for _ in 1..size {
        let challenger = &population[rng.usize(0..n)];
        if challenger.fitness() > best.fitness() {
            best = challenger;
        }
    }
    best
}
