//! Line-mode terminal prompter.
//!
//! Questions and choice lists are written to the output (stderr when run
//! interactively, so stdout carries only the NDJSON echo). Answers are read
//! one line at a time. End of input aborts the prompt; Ctrl+C is handled for
//! the whole run by the pipeline.

use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

use crate::domain::{StationId, rgb_of};

use super::{Choice, PromptError, Prompter, Selection, Suggest};

/// Prompter reading answers from a line-oriented input.
pub struct TerminalPrompter<R, W> {
    input: Lines<R>,
    output: W,
}

impl TerminalPrompter<BufReader<Stdin>, std::io::Stderr> {
    /// Prompter on the process's stdin and stderr.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stderr())
    }
}

impl<R: AsyncBufRead + Unpin, W: Write> TerminalPrompter<R, W> {
    /// Prompter on arbitrary input and output.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: input.lines(),
            output,
        }
    }

    /// Consume the prompter, returning the output.
    pub fn into_output(self) -> W {
        self.output
    }

    async fn read_line(&mut self) -> Result<String, PromptError> {
        match self.input.next_line().await? {
            Some(l) => Ok(l.trim().to_string()),
            None => {
                writeln!(self.output)?;
                Err(PromptError::Aborted)
            }
        }
    }

    fn ask(&mut self, message: &str, hint: &str) -> Result<(), PromptError> {
        if hint.is_empty() {
            write!(self.output, "{} ", message.bold())?;
        } else {
            write!(self.output, "{} {} ", message.bold(), hint.dimmed())?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn list(&mut self, choices: &[Choice]) -> Result<(), PromptError> {
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {}", i + 1, paint(choice))?;
        }
        Ok(())
    }

    /// Read a 1-based choice number as an index; empty input picks `default`.
    async fn read_index(&mut self, len: usize, default: usize) -> Result<usize, PromptError> {
        loop {
            let line = self.read_line().await?;
            if line.is_empty() {
                return Ok(default);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=len).contains(&n) => return Ok(n - 1),
                _ => {
                    write!(self.output, "{} ", format!("Enter a number 1-{len}:").yellow())?;
                    self.output.flush()?;
                }
            }
        }
    }
}

/// Render a choice title in its colour, if it has one.
fn paint(choice: &Choice) -> String {
    match choice.color.as_deref().and_then(rgb_of) {
        Some((r, g, b)) => choice.title.truecolor(r, g, b).to_string(),
        None => choice.title.clone(),
    }
}

/// Parse "1 3,4" into zero-based indices. `None` if any token is invalid.
fn parse_indices(line: &str, len: usize) -> Option<Vec<usize>> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| match t.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Some(n - 1),
            _ => None,
        })
        .collect()
}

impl<R: AsyncBufRead + Unpin, W: Write> Prompter for TerminalPrompter<R, W> {
    async fn text(&mut self, message: &str) -> Result<String, PromptError> {
        self.ask(message, "")?;
        self.read_line().await
    }

    async fn autocomplete<S: Suggest>(
        &mut self,
        message: &str,
        source: &S,
    ) -> Result<String, PromptError> {
        self.ask(message, "(name or id)")?;
        let typed = self.read_line().await?;
        if typed.is_empty() || StationId::is_id(&typed) {
            return Ok(typed);
        }

        let suggestions = match source.suggest(&typed).await {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "suggestions unavailable");
                return Ok(typed);
            }
        };
        if suggestions.is_empty() {
            return Ok(typed);
        }

        for (i, s) in suggestions.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {}", i + 1, s.label)?;
        }
        self.ask("Which one?", "(Enter for 1)")?;
        let picked = self.read_index(suggestions.len(), 0).await?;
        Ok(suggestions[picked].id.to_string())
    }

    async fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String, PromptError> {
        writeln!(self.output, "{}", message.bold())?;
        self.list(choices)?;
        self.ask(">", "(Enter for 1)")?;
        let picked = self.read_index(choices.len(), 0).await?;
        Ok(choices[picked].value.clone())
    }

    async fn multiselect(
        &mut self,
        message: &str,
        choices: &[Choice],
    ) -> Result<Selection, PromptError> {
        writeln!(self.output, "{}", message.bold())?;
        self.list(choices)?;
        self.ask(">", "(numbers separated by spaces)")?;
        loop {
            let line = self.read_line().await?;
            if let Some(indices) = parse_indices(&line, choices.len()) {
                let picked: Vec<&str> = indices.iter().map(|&i| choices[i].value.as_str()).collect();
                return Ok(Selection::of(choices, &picked));
            }
            write!(
                self.output,
                "{} ",
                format!("Enter numbers 1-{}:", choices.len()).yellow()
            )?;
            self.output.flush()?;
        }
    }
}
