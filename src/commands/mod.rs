//! Command implementations

pub mod benchmark;
pub mod computer;
pub mod human;
pub mod menu;
pub mod prompt;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use computer::{ComputerOutcome, run_computer_guesser};
pub use human::{HumanOutcome, run_human_guesser};
pub use menu::{MenuChoice, run_menu};
pub use prompt::Prompter;
pub use solve::{SolveConfig, SolveResult, solve_combination, solve_secret};
