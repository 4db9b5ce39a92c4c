//! Player guesses the computer's combination

use super::prompt::Prompter;
use crate::core::{Combination, Level, Score};
use crate::error::Result;
use log::info;
use std::io::{BufRead, Write};

/// How a player-guesses game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanOutcome {
    /// The player found the combination
    Solved { guesses: usize },
    /// The player asked to see the answer
    GaveUp { guesses: usize },
}

/// Play one game with the player as the guesser
///
/// Each valid guess is scored against `secret`. Invalid guesses are
/// explained and do not count. Entering `q` reveals the secret.
///
/// # Errors
///
/// Returns `GameError::InputClosed` at end of input, or an I/O error.
pub fn run_human_guesser<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    level: Level,
    secret: Combination,
) -> Result<HumanOutcome> {
    let prompt = format!(
        "Enter your guess (4 distinct digits between 0 and {}, or q to give up): ",
        level.max_digit()
    );
    let mut guesses = 0;

    loop {
        let input = prompter.ask(&prompt)?;

        if input.eq_ignore_ascii_case("q") {
            prompter.say(format_args!("The combination was {secret}."))?;
            info!("player gave up after {guesses} guesses");
            return Ok(HumanOutcome::GaveUp { guesses });
        }

        let guess = match Combination::parse(&input, level) {
            Ok(guess) => guess,
            Err(e) => {
                prompter.say(format_args!("Invalid guess: {e}"))?;
                continue;
            }
        };
        guesses += 1;

        let score = Score::calculate(&guess, &secret);
        prompter.say(format_args!(
            "Digits in the right position: {}",
            score.right_position()
        ))?;
        prompter.say(format_args!(
            "Correct digits in wrong position: {}",
            score.wrong_position()
        ))?;

        if score.is_perfect() {
            prompter.say("Congratulations, you have guessed the combination!")?;
            prompter.say(format_args!(
                "Solved in {guesses} {}.",
                if guesses == 1 { "guess" } else { "guesses" }
            ))?;
            info!("player guessed the combination in {guesses} guesses");
            return Ok(HumanOutcome::Solved { guesses });
        }
    }
}
