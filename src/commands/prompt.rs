//! Line-oriented console prompts
//!
//! Wraps a reader and a writer so the interactive modes can be driven by
//! stdin/stdout or by in-memory buffers.

use crate::error::{GameError, Result};
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Console used by the interactive game modes
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show a prompt and read one trimmed line
    ///
    /// Bytes that are not valid UTF-8 are replaced, so the line fails
    /// whatever parser reads it instead of ending the session.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` at end of input, or an I/O error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    ///
    /// The first attempt shows `prompt`; every rejected answer is followed
    /// by `retry`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` at end of input, or an I/O error.
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, retry: &str, mut parse: F) -> Result<T>
    where
        E: Display,
        F: FnMut(&str) -> std::result::Result<T, E>,
    {
        let mut answer = self.ask(prompt)?;
        loop {
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("rejected input '{answer}': {e}");
                    answer = self.ask(retry)?;
                }
            }
        }
    }

    /// Ask for a whole number in `min..=max`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` at end of input, or an I/O error.
    pub fn ask_number(&mut self, prompt: &str, min: u8, max: u8) -> Result<u8> {
        let retry = format!("Invalid input. Please enter a number between {min} and {max}: ");
        self.ask_until(prompt, &retry, |answer| {
            answer
                .parse::<u8>()
                .map_err(|e| e.to_string())
                .and_then(|value| {
                    if (min..=max).contains(&value) {
                        Ok(value)
                    } else {
                        Err(format!("{value} is out of range"))
                    }
                })
        })
    }

    /// Consume the prompter and return the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn ask_returns_trimmed_line() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.ask("> ").unwrap(), "hello");
        assert_eq!(output(p), "> ");
    }

    #[test]
    fn ask_at_end_of_input_is_closed() {
        let mut p = prompter("");
        assert!(matches!(p.ask("> "), Err(GameError::InputClosed)));
    }

    #[test]
    fn ask_number_retries_until_in_range() {
        let mut p = prompter("abc\n42\n7\n");
        assert_eq!(p.ask_number("Level: ", 4, 10).unwrap(), 7);
        assert_eq!(
            output(p),
            "Level: Invalid input. Please enter a number between 4 and 10: \
             Invalid input. Please enter a number between 4 and 10: "
        );
    }

    #[test]
    fn ask_number_retries_after_invalid_utf8() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"5\n");
        let mut p = Prompter::new(Cursor::new(input), Vec::new());

        assert_eq!(p.ask_number("Level: ", 4, 10).unwrap(), 5);
        assert_eq!(
            output(p),
            "Level: Invalid input. Please enter a number between 4 and 10: "
        );
    }

    #[test]
    fn ask_until_uses_parser() {
        let mut p = prompter("no\nyes\n");
        let answer = p
            .ask_until("? ", "again? ", |s| {
                if s == "yes" { Ok(true) } else { Err("not yes") }
            })
            .unwrap();
        assert!(answer);
        assert_eq!(output(p), "? again? ");
    }

    #[test]
    fn say_writes_line() {
        let mut p = prompter("");
        p.say("hi").unwrap();
        p.say(format_args!("{} {}", 1, 2)).unwrap();
        assert_eq!(output(p), "hi\n1 2\n");
    }
}
