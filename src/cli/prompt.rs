//! Interactive input/output
//!
//! Commands ask for missing values through a [`Prompter`] and report results
//! through it, so handlers can be driven by a terminal or by a script.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{ContactBookError, ContactResult};
use crate::models::ContactId;

/// Validation callback: `Err(message)` rejects the input and re-prompts
pub type Validator<'v> = &'v dyn Fn(&str) -> Result<(), String>;

/// Source of user input and sink for user-facing output
pub trait Prompter {
    /// Ask for free text, repeating until `validate` accepts it
    fn input(&mut self, message: &str, validate: Option<Validator<'_>>) -> ContactResult<String>;

    /// Ask for one of `choices`, returning its index
    fn select(&mut self, message: &str, choices: &[&str]) -> ContactResult<usize>;

    /// Print a line of output
    fn say(&mut self, line: &str) -> ContactResult<()>;
}

/// Rejects empty or whitespace-only input
pub fn non_empty(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("This field cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Accepts only a positive whole number
pub fn positive_id(input: &str) -> Result<(), String> {
    input
        .parse::<ContactId>()
        .map(|_| ())
        .map_err(|_| "Please enter a valid ID (positive number)".to_string())
}

/// Prompter reading lines from a reader and writing to a writer
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Create a prompter over arbitrary streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> ContactResult<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(ContactBookError::Io("Input closed before a value was entered".into()));
        }
        Ok(line.trim().to_string())
    }

    fn ask(&mut self, message: &str) -> ContactResult<String> {
        write!(self.writer, "? {} ", message)?;
        self.writer.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input(&mut self, message: &str, validate: Option<Validator<'_>>) -> ContactResult<String> {
        loop {
            let answer = self.ask(message)?;
            match validate.map_or(Ok(()), |v| v(&answer)) {
                Ok(()) => return Ok(answer),
                Err(reason) => writeln!(self.writer, ">> {}", reason)?,
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> ContactResult<usize> {
        if choices.is_empty() {
            return Err(ContactBookError::Validation("Nothing to choose from".into()));
        }

        writeln!(self.writer, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, choice)?;
        }

        loop {
            let answer = self.ask(&format!("Choice [1-{}]:", choices.len()))?;
            if let Some(index) = resolve_choice(&answer, choices) {
                return Ok(index);
            }
            writeln!(self.writer, ">> Please choose one of the listed options")?;
        }
    }

    fn say(&mut self, line: &str) -> ContactResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// Match a 1-based number or a label (case-insensitive)
fn resolve_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&n).then(|| n - 1);
    }
    choices.iter().position(|c| c.eq_ignore_ascii_case(answer))
}

/// Prompter answering from a queue of canned responses
///
/// Answers that fail validation are consumed and the next one is tried, the
/// same way a user would be re-prompted. Output is collected in memory.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    output: Vec<String>,
    prompts: usize,
}

impl ScriptedPrompter {
    /// Create a prompter that will give `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
        }
    }

    /// Everything passed to `say`
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of answers consumed
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    fn next_answer(&mut self, message: &str) -> ContactResult<String> {
        self.prompts += 1;
        self.answers.pop_front().ok_or_else(|| {
            ContactBookError::Io(format!("No scripted answer for prompt '{}'", message))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, validate: Option<Validator<'_>>) -> ContactResult<String> {
        loop {
            let answer = self.next_answer(message)?;
            match validate.map_or(Ok(()), |v| v(&answer)) {
                Ok(()) => return Ok(answer),
                Err(reason) => self.output.push(format!(">> {}", reason)),
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> ContactResult<usize> {
        loop {
            let answer = self.next_answer(message)?;
            if let Some(index) = resolve_choice(&answer, choices) {
                return Ok(index);
            }
        }
    }

    fn say(&mut self, line: &str) -> ContactResult<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
