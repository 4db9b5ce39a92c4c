//! Computer guesses the player's combination
//!
//! The player thinks of a combination and scores each of the computer's
//! guesses. The computer keeps only the combinations consistent with every
//! score until it hits the right one.

use super::prompt::Prompter;
use crate::core::{DIGITS, Score};
use crate::error::{GameError, Result};
use crate::solver::{Solver, Strategy};
use log::info;
use std::io::{BufRead, Write};

/// How a computer-guesses game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerOutcome {
    /// The player confirmed a guess with every digit in place
    Guessed { guesses: usize },
    /// The player's scores ruled out every combination
    Inconsistent { guesses: usize },
}

/// Play one game with the computer as the guesser
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input, or an I/O error.
pub fn run_computer_guesser<R, W, S>(
    prompter: &mut Prompter<R, W>,
    solver: &mut Solver<S>,
) -> Result<ComputerOutcome>
where
    R: BufRead,
    W: Write,
    S: Strategy,
{
    let mut guesses = 0;

    loop {
        let guess = solver.next_guess().ok_or(GameError::NoCandidates)?;
        guesses += 1;

        prompter.say(format_args!("Computer's guess: {guess}"))?;

        let right = prompter.ask_number(
            "Enter number of digits in the correct position: ",
            0,
            DIGITS as u8,
        )?;

        if right as usize == DIGITS {
            prompter.say("The computer has guessed your combination!")?;
            prompter.say(format_args!("It took {guesses} {}.", plural(guesses)))?;
            info!("computer guessed the combination in {guesses} guesses");
            return Ok(ComputerOutcome::Guessed { guesses });
        }

        let score = ask_wrong_position(prompter, right)?;

        if solver.record(guess, score) == 0 {
            prompter.say("Input error detected, restarting game...")?;
            info!("game abandoned after {guesses} guesses: inconsistent scores");
            return Ok(ComputerOutcome::Inconsistent { guesses });
        }
    }
}

/// Ask for the wrong-position count, accepting only scores that can occur
fn ask_wrong_position<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    right: u8,
) -> Result<Score> {
    let max_wrong = if right as usize == DIGITS - 1 {
        0
    } else {
        DIGITS as u8 - right
    };
    let retry = format!("Invalid input. Please enter a number between 0 and {max_wrong}: ");

    prompter.ask_until(
        "Enter number of correct digits in the wrong position: ",
        &retry,
        |answer| {
            let wrong: u8 = answer.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
            Score::new(right, wrong).map_err(|e| e.to_string())
        },
    )
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Combination, Level};
    use crate::solver::FirstStrategy;
    use std::io::Cursor;

    fn play(input: &str, level: u8) -> (Result<ComputerOutcome>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut solver = Solver::new(FirstStrategy, Level::new(level).unwrap());
        let outcome = run_computer_guesser(&mut prompter, &mut solver);
        (outcome, String::from_utf8(prompter.into_output()).unwrap())
    }

    /// Scores the deterministic guess sequence against `secret`
    fn honest_input(secret: &str, level: u8) -> String {
        let level = Level::new(level).unwrap();
        let secret = Combination::parse(secret, level).unwrap();
        let mut solver = Solver::new(FirstStrategy, level);
        let mut input = String::new();

        loop {
            let guess = solver.next_guess().unwrap();
            let score = Score::calculate(&guess, &secret);
            if score.is_perfect() {
                input.push_str("4\n");
                return input;
            }
            input.push_str(&format!(
                "{}\n{}\n",
                score.right_position(),
                score.wrong_position()
            ));
            solver.record(guess, score);
        }
    }

    #[test]
    fn first_guess_correct() {
        let (outcome, output) = play("4\n", 6);
        assert_eq!(outcome.unwrap(), ComputerOutcome::Guessed { guesses: 1 });
        assert!(output.contains("Computer's guess: 0123"));
        assert!(output.contains("The computer has guessed your combination!"));
        assert!(output.contains("It took 1 guess."));
    }

    #[test]
    fn computer_finds_secret_with_honest_scores() {
        let input = honest_input("5203", 6);
        let (outcome, output) = play(&input, 6);

        assert!(matches!(outcome.unwrap(), ComputerOutcome::Guessed { .. }));
        assert!(output.contains("Computer's guess: 5203"));
    }

    #[test]
    fn inconsistent_scores_restart() {
        // Level 4 guesses are permutations of each other, so 0 and 0 is impossible
        let (outcome, output) = play("0\n0\n", 4);
        assert_eq!(outcome.unwrap(), ComputerOutcome::Inconsistent { guesses: 1 });
        assert!(output.contains("Input error detected, restarting game..."));
    }

    #[test]
    fn malformed_counts_reprompt() {
        let (outcome, output) = play("x\n9\n3\n1\n0\n4\n", 6);
        assert!(matches!(outcome.unwrap(), ComputerOutcome::Guessed { guesses: 2 }));
        assert!(output.contains("Invalid input. Please enter a number between 0 and 4: "));
        assert!(output.contains("Invalid input. Please enter a number between 0 and 0: "));
    }

    #[test]
    fn input_closed_mid_game() {
        let (outcome, _) = play("1\n", 6);
        assert!(matches!(outcome, Err(GameError::InputClosed)));
    }
}
