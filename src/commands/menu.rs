//! Classic menu-driven game
//!
//! Repeatedly offers the two game modes until the player quits.

use super::computer::run_computer_guesser;
use super::human::run_human_guesser;
use super::prompt::Prompter;
use crate::config::GameConfig;
use crate::core::Level;
use crate::error::{GameError, Result};
use crate::solver::{
    Solver, generate_all_combinations, rng_from_seed, select_random_combination,
};
use rand::Rng;
use std::io::{BufRead, Write};

const MENU: &str = "\nChoose game mode:\n\
                    0. Quit\n\
                    1. Computer guesses your combination\n\
                    2. You guess the combination the computer has selected\n\
                    \n\
                    Enter the number of your chosen option: ";

const LEVEL_PROMPT: &str = "Please enter the difficulty level (from 4 to 10): ";
const LEVEL_RETRY: &str = "Invalid input. Please enter a number between 4 and 10: ";

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    ComputerGuesses,
    HumanGuesses,
}

impl MenuChoice {
    /// Parse a menu answer, `None` if it names no entry
    #[must_use]
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "0" => Some(Self::Quit),
            "1" => Some(Self::ComputerGuesses),
            "2" => Some(Self::HumanGuesses),
            _ => None,
        }
    }
}

/// Run the menu loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn run_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
) -> Result<()> {
    prompter.say("-- Welcome to DigitMind --")?;

    let mut rng = rng_from_seed(config.seed);
    let mut games: u64 = 0;

    loop {
        let round = ask_choice(prompter).and_then(|choice| match choice {
            MenuChoice::Quit => Ok(false),
            _ => {
                games += 1;
                let level = ask_level(prompter, config)?;
                play_round(prompter, &config.with_seed_offset(games), choice, level, &mut rng)?;
                Ok(true)
            }
        });

        match round {
            Ok(true) => {}
            Ok(false) | Err(GameError::InputClosed) => {
                prompter.say("Goodbye!")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

/// Show the menu until a valid entry is chosen
fn ask_choice<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<MenuChoice> {
    loop {
        if let Some(choice) = MenuChoice::parse(&prompter.ask(MENU)?) {
            return Ok(choice);
        }
    }
}

fn ask_level<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
) -> Result<Level> {
    match config.level {
        Some(level) => {
            prompter.say(format_args!("Difficulty level: {level}"))?;
            Ok(level)
        }
        None => prompter.ask_until(LEVEL_PROMPT, LEVEL_RETRY, str::parse::<Level>),
    }
}

fn play_round<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
    choice: MenuChoice,
    level: Level,
    rng: &mut impl Rng,
) -> Result<()> {
    match choice {
        MenuChoice::ComputerGuesses => {
            let mut solver = Solver::new(config.strategy(), level);
            run_computer_guesser(prompter, &mut solver)?;
        }
        MenuChoice::HumanGuesses => {
            let combinations = generate_all_combinations(level);
            let secret =
                select_random_combination(&combinations, rng).ok_or(GameError::NoCandidates)?;
            run_human_guesser(prompter, level, secret)?;
        }
        MenuChoice::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, config: &GameConfig) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_menu(&mut prompter, config).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn menu_choice_parse() {
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::ComputerGuesses));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::HumanGuesses));
        assert_eq!(MenuChoice::parse("3"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("x"), None);
    }

    #[test]
    fn quit_immediately() {
        let output = run("0\n", &GameConfig::default());
        assert!(output.starts_with("-- Welcome to DigitMind --\n"));
        assert_eq!(output.matches("Choose game mode:").count(), 1);
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn invalid_choice_shows_menu_again() {
        let output = run("7\nfoo\n0\n", &GameConfig::default());
        assert_eq!(output.matches("Choose game mode:").count(), 3);
    }

    #[test]
    fn end_of_input_quits() {
        let output = run("", &GameConfig::default());
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn computer_round_then_quit() {
        let config = GameConfig {
            strategy: "first".to_string(),
            ..GameConfig::default()
        };
        let output = run("1\n3\n11\n4\n4\n0\n", &config);

        assert!(output.contains(LEVEL_RETRY));
        assert!(output.contains("Computer's guess: 0123"));
        assert!(output.contains("The computer has guessed your combination!"));
        assert_eq!(output.matches("Choose game mode:").count(), 2);
    }

    #[test]
    fn invalid_utf8_level_is_retried() {
        let config = GameConfig {
            strategy: "first".to_string(),
            ..GameConfig::default()
        };
        let mut input = b"1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"4\n4\n0\n");

        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        run_menu(&mut prompter, &config).unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();

        assert!(output.contains(LEVEL_RETRY));
        assert!(output.contains("The computer has guessed your combination!"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn fixed_level_skips_prompt() {
        let config = GameConfig {
            level: Some(Level::new(4).unwrap()),
            strategy: "first".to_string(),
            ..GameConfig::default()
        };
        let output = run("1\n4\n0\n", &config);

        assert!(!output.contains(LEVEL_PROMPT));
        assert!(output.contains("Difficulty level: 4"));
    }

    #[test]
    fn human_round_with_give_up() {
        let config = GameConfig {
            level: Some(Level::new(5).unwrap()),
            seed: Some(11),
            ..GameConfig::default()
        };
        let output = run("2\nq\n0\n", &config);

        assert!(output.contains("Enter your guess (4 distinct digits between 0 and 4"));
        assert!(output.contains("The combination was "));
    }

    #[test]
    fn end_of_input_mid_game_quits() {
        let output = run("2\n6\n0123\n", &GameConfig::default());
        assert!(output.ends_with("Goodbye!\n"));
    }
}
