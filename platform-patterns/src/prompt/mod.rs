//! Interactive prompts.
//!
//! The pipeline asks for each field through a [`Prompter`]. The terminal
//! implementation reads answers line by line; the scripted one replays
//! canned answers in tests.

#[cfg(test)]
mod scripted;
mod terminal;

#[cfg(test)]
pub use scripted::{Answer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

use crate::lookup::{Lookup, LookupError};
use crate::resolver::{StationResolver, Suggestion};

/// Errors from a prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The user cancelled (Ctrl+C or end of input)
    #[error("aborted")]
    Aborted,

    /// Reading or writing the terminal failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One option in a select or multi-select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value returned when the choice is picked.
    pub value: String,
    /// Text shown to the user.
    pub title: String,
    /// Colour to render the title in, as `#rgb` or `#rrggbb`.
    pub color: Option<String>,
}

impl Choice {
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Result of a multi-select: every offered value and whether it was picked,
/// in offer order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<(String, bool)>,
}

impl Selection {
    /// Build a selection over `choices` with the given values picked.
    pub fn of<S: AsRef<str>>(choices: &[Choice], picked: &[S]) -> Self {
        let items = choices
            .iter()
            .map(|c| {
                let on = picked.iter().any(|p| p.as_ref() == c.value);
                (c.value.clone(), on)
            })
            .collect();
        Self { items }
    }

    /// The picked values, in offer order.
    pub fn selected(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, on)| *on)
            .map(|(v, _)| v.clone())
            .collect()
    }
}

impl IntoIterator for Selection {
    type Item = (String, bool);
    type IntoIter = std::vec::IntoIter<(String, bool)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Source of autocomplete suggestions.
#[allow(async_fn_in_trait)]
pub trait Suggest {
    async fn suggest(&self, input: &str) -> Result<Vec<Suggestion>, LookupError>;
}

impl<L: Lookup> Suggest for StationResolver<'_, L> {
    async fn suggest(&self, input: &str) -> Result<Vec<Suggestion>, LookupError> {
        StationResolver::suggest(self, input).await
    }
}

/// Interactive input, one question at a time.
// Prompts never run concurrently, so futures need not be Send.
#[allow(async_fn_in_trait)]
pub trait Prompter {
    /// Free text. May be empty.
    async fn text(&mut self, message: &str) -> Result<String, PromptError>;

    /// Free text with suggestions. Returns either the typed text or the id
    /// of a picked suggestion.
    async fn autocomplete<S: Suggest>(
        &mut self,
        message: &str,
        source: &S,
    ) -> Result<String, PromptError>;

    /// Pick exactly one choice; returns its value.
    async fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String, PromptError>;

    /// Pick any number of choices.
    async fn multiselect(
        &mut self,
        message: &str,
        choices: &[Choice],
    ) -> Result<Selection, PromptError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<Choice> {
        vec![
            Choice::new("U2", "U2"),
            Choice::new("U5", "U5"),
            Choice::new("U8", "U8"),
        ]
    }

    #[test]
    fn selection_of_marks_picked() {
        let selection = Selection::of(&choices(), &["U8", "U2"]);
        assert_eq!(selection.selected(), vec!["U2", "U8"]);
        let pairs: Vec<_> = selection.into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("U2".to_string(), true),
                ("U5".to_string(), false),
                ("U8".to_string(), true)
            ]
        );
    }

    #[test]
    fn selection_ignores_unknown_values() {
        let selection = Selection::of(&choices(), &["U9"]);
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn choice_color() {
        let choice = Choice::new("red", "red").with_color("#ff0000");
        assert_eq!(choice.color.as_deref(), Some("#ff0000"));
    }
}
