//! Display functions for command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a combination
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} (level {})",
        result.secret.to_string().bright_yellow().bold(),
        result.level
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}  ({})",
            turn,
            step.guess.to_string().bold(),
            score_to_pegs(step.score),
            step.score
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    reduction.log2(),
                    reduction
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        format!("level {}", result.level).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_games).green()
    );
    if result.failed() > 0 {
        println!(
            "   Unsolved:         {}",
            result.failed().to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(count as f64, result.total_games as f64, 40);
            println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}
