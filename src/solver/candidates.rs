//! Candidate set generation and filtering
//!
//! The candidate set holds every combination still consistent with all the
//! feedback observed so far. It only ever shrinks.

use crate::core::{Combination, Level, Score};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Generate every combination of distinct digits for a level
///
/// Combinations come out in lexicographic order, from `0123` up to the
/// highest digits in descending order.
///
/// # Examples
/// ```
/// use digitmind::core::Level;
/// use digitmind::solver::generate_all_combinations;
///
/// let all = generate_all_combinations(Level::new(4).unwrap());
/// assert_eq!(all.len(), 24);
/// assert_eq!(all[0].to_string(), "0123");
/// assert_eq!(all[23].to_string(), "3210");
/// ```
#[must_use]
pub fn generate_all_combinations(level: Level) -> Vec<Combination> {
    let n = level.value();
    let mut combinations = Vec::with_capacity(level.combination_count());

    for i in 0..n {
        for j in (0..n).filter(|&j| j != i) {
            for k in (0..n).filter(|&k| k != i && k != j) {
                for l in (0..n).filter(|&l| l != i && l != j && l != k) {
                    combinations.push(Combination::from_digits_unchecked([i, j, k, l]));
                }
            }
        }
    }

    debug_assert_eq!(combinations.len(), level.combination_count());
    combinations
}

/// Remove every candidate that would not have produced `score` for `guess`
///
/// Returns the number of candidates removed.
///
/// # Examples
/// ```
/// use digitmind::core::{Combination, Level, Score};
/// use digitmind::solver::{filter_combinations, generate_all_combinations};
///
/// let level = Level::new(4).unwrap();
/// let mut candidates = generate_all_combinations(level);
/// let guess = Combination::parse("0123", level).unwrap();
///
/// filter_combinations(&mut candidates, &guess, Score::PERFECT);
/// assert_eq!(candidates, vec![guess]);
/// ```
pub fn filter_combinations(
    candidates: &mut Vec<Combination>,
    guess: &Combination,
    score: Score,
) -> usize {
    let before = candidates.len();
    candidates.retain(|candidate| Score::calculate(guess, candidate) == score);
    before - candidates.len()
}

/// Pick one combination uniformly at random
///
/// Returns `None` if `combinations` is empty.
pub fn select_random_combination<R: Rng + ?Sized>(
    combinations: &[Combination],
    rng: &mut R,
) -> Option<Combination> {
    combinations.choose(rng).copied()
}

/// Build the random number generator used for guesses and secrets
///
/// A fixed seed gives reproducible games; without one the generator is
/// seeded from the operating system.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
