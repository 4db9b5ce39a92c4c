//! Benchmark command
//!
//! Lets the computer solve every secret of a level and collects statistics.

use super::solve::solve_combination;
use crate::config::GameConfig;
use crate::core::Level;
use crate::solver::generate_all_combinations;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub level: Level,
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    /// Games that hit the guess bound without finding the secret
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total_games - self.solved
    }
}

/// Run the solver against every secret of `level`, or the first `limit`
///
/// Games run in parallel. Each game gets its own strategy; with a seed in
/// `config` the seed is offset by the secret's index so runs repeat exactly.
#[must_use]
pub fn run_benchmark(
    config: &GameConfig,
    level: Level,
    limit: Option<usize>,
    show_progress: bool,
) -> BenchmarkResult {
    let secrets: Vec<_> = generate_all_combinations(level)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if show_progress {
        progress_bar(secrets.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    // Guess counts of solved games; None for unsolved
    let outcomes: Vec<Option<usize>> = secrets
        .par_iter()
        .enumerate()
        .map(|(idx, &secret)| {
            let strategy = config.with_seed_offset(idx as u64).strategy();
            let outcome = solve_combination(secret, level, config.max_guesses, strategy)
                .ok()
                .filter(|result| result.success)
                .map(|result| result.guesses.len());
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &guesses in outcomes.iter().flatten() {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let solved = distribution.values().sum::<usize>();
    let total_guesses = outcomes.iter().flatten().sum::<usize>();
    let total_games = secrets.len();

    info!("benchmark at level {level}: {solved}/{total_games} solved in {duration:?}");

    BenchmarkResult {
        level,
        total_games,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_GUESSES;

    fn config(strategy: &str) -> GameConfig {
        GameConfig {
            seed: Some(99),
            strategy: strategy.to_string(),
            ..GameConfig::default()
        }
    }

    #[test]
    fn benchmark_solves_every_secret() {
        let level = Level::new(5).unwrap();
        let result = run_benchmark(&config("random"), level, None, false);

        assert_eq!(result.total_games, 120);
        assert_eq!(result.solved, 120);
        assert_eq!(result.failed(), 0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= GameConfig::default().max_guesses);
    }

    #[test]
    fn benchmark_every_level_within_default_bound() {
        let config = GameConfig {
            seed: Some(1),
            ..config("random")
        };

        for level in Level::all() {
            let result = run_benchmark(&config, level, None, false);

            assert_eq!(result.total_games, level.combination_count());
            assert_eq!(result.failed(), 0, "level {level} left secrets unsolved");
            assert!(
                result.max_guesses <= DEFAULT_MAX_GUESSES,
                "level {level} needed {} guesses",
                result.max_guesses
            );
        }
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let level = Level::new(6).unwrap();
        let result = run_benchmark(&config("first"), level, Some(50), false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.total_games, 50);

        let weighted: usize = result.distribution.iter().map(|(g, n)| g * n).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let level = Level::new(7).unwrap();
        let result = run_benchmark(&config("random"), level, Some(40), false);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let level = Level::new(6).unwrap();
        let a = run_benchmark(&config("random"), level, Some(30), false);
        let b = run_benchmark(&config("random"), level, Some(30), false);
        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_zero_limit() {
        let level = Level::new(4).unwrap();
        let result = run_benchmark(&config("first"), level, Some(0), false);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_tight_bound_reports_failures() {
        let level = Level::new(6).unwrap();
        let tight = GameConfig {
            max_guesses: 1,
            ..config("first")
        };
        let result = run_benchmark(&tight, level, Some(10), false);

        // Only 0123 is found on the first guess
        assert_eq!(result.solved, 1);
        assert_eq!(result.failed(), 9);
    }
}
