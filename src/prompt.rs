//! User input handling for scaff.
//! Variables that were not supplied on the command line are asked for one at a
//! time through a [`Prompter`].

use crate::error::{Error, Result};
use dialoguer::Input;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// Trait for asking the user for the value of a variable.
pub trait Prompter {
    /// Returns the value entered for `name`. Empty values are valid.
    fn prompt_variable(&self, name: &str) -> Result<String>;
}

const PROMPT_SUFFIX: &str = " > ";

/// Text shown when asking for a variable.
pub fn prompt_text(name: &str) -> String {
    format!("{}{PROMPT_SUFFIX}", prompt_label(name))
}

/// Prompt text without the trailing marker, for prompts that draw their own.
pub fn prompt_label(name: &str) -> String {
    format!("variable value required for '{name}'")
}

/// Strips the line terminator and a single pair of surrounding double quotes.
pub fn clean_input(input: &str) -> String {
    let input = input.strip_suffix('\n').unwrap_or(input);
    let input = input.strip_suffix('\r').unwrap_or(input);

    match input.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(unquoted) => unquoted.to_string(),
        None => input.to_string(),
    }
}

/// Reads answers line by line from any buffered reader, writing the prompt to `output`.
pub struct ReaderPrompter<R: BufRead, W: Write> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input: RefCell::new(input), output: RefCell::new(output) }
    }

    /// Consumes the prompter and returns the output writer.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn read_line(&self, name: &str) -> io::Result<String> {
        {
            let mut output = self.output.borrow_mut();
            output.write_all(prompt_text(name).as_bytes())?;
            output.flush()?;
        }

        let mut line = String::new();
        self.input.borrow_mut().read_line(&mut line)?;

        // A line without its terminator means the stream ended mid-answer
        if !line.ends_with('\n') {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn prompt_variable(&self, name: &str) -> Result<String> {
        let line = self
            .read_line(name)
            .map_err(|source| Error::PromptError { name: name.to_string(), source })?;
        Ok(clean_input(&line))
    }
}

/// Prompter for interactive terminals, built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt_variable(&self, name: &str) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt(prompt_label(name))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError {
                name: name.to_string(),
                source: io::Error::other(e),
            })?;

        Ok(clean_input(&input))
    }
}
