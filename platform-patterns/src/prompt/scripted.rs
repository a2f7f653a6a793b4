//! Prompter that replays canned answers.

use std::collections::VecDeque;

use super::{Choice, PromptError, Prompter, Selection, Suggest};

/// A canned answer to the next prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text, for text and autocomplete prompts.
    Text(String),
    /// Value of the picked choice, for select prompts.
    Pick(String),
    /// Values of the picked choices, for multi-select prompts.
    PickMany(Vec<String>),
    /// The user cancels this prompt.
    Abort,
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Answer::Text(s.into())
    }

    pub fn pick(s: impl Into<String>) -> Self {
        Answer::Pick(s.into())
    }

    pub fn pick_many<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Answer::PickMany(values.into_iter().map(Into::into).collect())
    }
}

/// Prompter for tests: answers come from a queue, questions are recorded.
///
/// Running out of answers counts as an abort. A mismatched answer kind
/// panics, since it means the script is wrong.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Messages of every prompt shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<Answer, PromptError> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            None | Some(Answer::Abort) => Err(PromptError::Aborted),
            Some(answer) => Ok(answer),
        }
    }
}

impl Prompter for ScriptedPrompter {
    async fn text(&mut self, message: &str) -> Result<String, PromptError> {
        match self.next(message)? {
            Answer::Text(s) => Ok(s),
            other => panic!("expected text answer for {message:?}, got {other:?}"),
        }
    }

    async fn autocomplete<S: Suggest>(
        &mut self,
        message: &str,
        _source: &S,
    ) -> Result<String, PromptError> {
        self.text(message).await
    }

    async fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String, PromptError> {
        match self.next(message)? {
            Answer::Pick(value) => {
                assert!(
                    choices.iter().any(|c| c.value == value),
                    "{value:?} is not a choice for {message:?}"
                );
                Ok(value)
            }
            other => panic!("expected pick answer for {message:?}, got {other:?}"),
        }
    }

    async fn multiselect(
        &mut self,
        message: &str,
        choices: &[Choice],
    ) -> Result<Selection, PromptError> {
        match self.next(message)? {
            Answer::PickMany(values) => Ok(Selection::of(choices, &values)),
            other => panic!("expected multi-pick answer for {message:?}, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MockLookup;
    use crate::resolver::StationResolver;

    #[tokio::test]
    async fn replays_answers_in_order() {
        let lookup = MockLookup::new();
        let resolver = StationResolver::new(&lookup, "test");
        let choices = vec![Choice::new("a", "A"), Choice::new("b", "B")];
        let mut prompter = ScriptedPrompter::new([
            Answer::text("Alex"),
            Answer::pick("b"),
            Answer::pick_many(["a"]),
        ]);

        assert_eq!(prompter.autocomplete("Station?", &resolver).await.unwrap(), "Alex");
        assert_eq!(prompter.select("One?", &choices).await.unwrap(), "b");
        let selection = prompter.multiselect("Many?", &choices).await.unwrap();
        assert_eq!(selection.selected(), vec!["a"]);
        assert_eq!(prompter.asked(), ["Station?", "One?", "Many?"]);
        assert_eq!(prompter.remaining(), 0);
    }

    #[tokio::test]
    async fn abort_and_exhaustion_are_aborts() {
        let mut prompter = ScriptedPrompter::new([Answer::Abort]);
        assert!(matches!(prompter.text("a").await, Err(PromptError::Aborted)));
        assert!(matches!(prompter.text("b").await, Err(PromptError::Aborted)));
    }
}
