//! DigitMind - CLI
//!
//! Guess the computer's combination, or let the computer guess yours.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use digitmind::{
    commands::{Prompter, SolveConfig, run_benchmark, run_menu, solve_secret},
    config::{DEFAULT_MAX_GUESSES, GameConfig},
    core::Level,
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(
    name = "digitmind",
    about = "Mastermind-style digit deduction game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty level (4-10): digits range from 0 to level-1
    #[arg(short, long, global = true, value_parser = parse_level)]
    level: Option<Level>,

    /// Seed for reproducible secrets and guesses
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guess strategy: random (default) or first
    #[arg(short, long, global = true, default_value = "random", value_parser = clap::builder::PossibleValuesParser::new(StrategyType::NAMES))]
    strategy: String,

    /// Give up a computer game after this many guesses (solve, benchmark)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classic menu-driven game (default)
    Play,

    /// Computer guesses your combination in a terminal UI
    Tui,

    /// Let the computer solve a specific combination
    Solve {
        /// The secret combination, e.g. 0123
        secret: String,

        /// Show candidate counts for each step
        #[arg(long)]
        details: bool,
    },

    /// Solve every combination of a level and report statistics
    Benchmark {
        /// Only play the first N combinations
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse::<Level>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = GameConfig {
        level: cli.level,
        seed: cli.seed,
        strategy: cli.strategy,
        max_guesses: cli.max_guesses,
    };

    // Default to the classic game if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Tui => run_tui_command(&config),
        Commands::Solve { secret, details } => run_solve_command(&config, secret, details),
        Commands::Benchmark { limit } => {
            run_benchmark_command(&config, limit);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let mut prompter = Prompter::stdio();
    run_menu(&mut prompter, config).context("game session failed")
}

fn run_tui_command(config: &GameConfig) -> Result<()> {
    use digitmind::interactive::{App, run_tui};

    let level = config.level.unwrap_or(Level::HARDEST);
    let app = App::new(level, config.strategy());
    run_tui(app)
}

fn run_solve_command(config: &GameConfig, secret: String, details: bool) -> Result<()> {
    let level = config.level.unwrap_or(Level::HARDEST);
    let solve_config = SolveConfig::new(secret, level, config.max_guesses);
    let result = solve_secret(&solve_config, config.strategy())?;

    print_solve_result(&result, details);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, limit: Option<usize>) {
    let level = config.level.unwrap_or(Level::HARDEST);

    println!(
        "Running benchmark on level {level} ({} combinations) with the {} strategy...",
        limit.map_or(level.combination_count(), |n| n.min(level.combination_count())),
        config.strategy().name()
    );

    let show_progress = std::io::stdout().is_terminal();
    let result = run_benchmark(config, level, limit, show_progress);
    print_benchmark_result(&result);
}
