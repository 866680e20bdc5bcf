//! Interactive terminal input.
//!
//! The workflow asks its questions through [`Prompter`] so it can be driven from a
//! script in tests. [`TerminalPrompter`] is the stdin/stdout implementation.

use crate::core::error::Result;
use colored::*;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Ask a question; `None` when input has ended
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

pub struct TerminalPrompter<R: BufRead> {
    input: R,
}

impl TerminalPrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> TerminalPrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Prompter for TerminalPrompter<R> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        print!("\n{} ", question.blue());
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
