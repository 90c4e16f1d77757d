//! Operator interaction: a line-oriented prompt channel and the numbered
//! choice loop built on top of it.

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use crate::error::{Result, SetupError};
use std::fmt::Display;

/// Channel used to talk to the operator.
pub trait Prompter {
    /// Show an informational line
    fn say(&mut self, message: &str);

    /// Show a warning line
    fn warn(&mut self, message: &str);

    /// Read one line of plain input
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Read one line of input without echoing it
    fn ask_secret(&mut self, prompt: &str) -> Result<String>;
}

/// Outcome of classifying one line of list-choice input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Accept(usize),
    Reject,
}

fn classify(input: &str, len: usize, default: Option<usize>) -> Answer {
    let input = input.trim();
    if input.is_empty() {
        return default.map_or(Answer::Reject, Answer::Accept);
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Answer::Accept(n - 1),
        _ => Answer::Reject,
    }
}

/// Present a 1-based numbered list and keep asking until the operator picks a
/// valid entry. Blank input selects `default` when one is given.
///
/// Returns the 0-based index of the selected choice.
pub fn ask_from_list<T: Display>(
    ui: &mut dyn Prompter,
    message: &str,
    choices: &[T],
    default: Option<usize>,
) -> Result<usize> {
    if let Some(index) = default {
        if index >= choices.len() {
            return Err(SetupError::InvalidDefaultIndex {
                index,
                len: choices.len(),
            });
        }
    }

    for (i, choice) in choices.iter().enumerate() {
        ui.say(&format!("  {}. {}", i + 1, choice));
    }

    let prompt = match default {
        Some(index) => format!("{} [{}]", message, index + 1),
        None => message.to_string(),
    };

    loop {
        let input = ui.ask(&prompt)?;
        match classify(&input, choices.len(), default) {
            Answer::Accept(index) => {
                tracing::debug!(index, "choice accepted");
                return Ok(index);
            }
            Answer::Reject => {
                ui.say(&format!(
                    "Please enter a number between 1 and {}.",
                    choices.len()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: [&str; 3] = ["first", "second", "third"];

    #[test]
    fn test_classify() {
        assert_eq!(classify("", 3, Some(0)), Answer::Accept(0));
        assert_eq!(classify("   ", 3, Some(2)), Answer::Accept(2));
        assert_eq!(classify("", 3, None), Answer::Reject);
        assert_eq!(classify("1", 3, None), Answer::Accept(0));
        assert_eq!(classify(" 3 ", 3, None), Answer::Accept(2));
        assert_eq!(classify("0", 3, None), Answer::Reject);
        assert_eq!(classify("4", 3, None), Answer::Reject);
        assert_eq!(classify("-1", 3, None), Answer::Reject);
        assert_eq!(classify("two", 3, Some(0)), Answer::Reject);
    }

    #[test]
    fn test_blank_input_selects_default() {
        let mut ui = ScriptedPrompter::new([""]);
        assert_eq!(ask_from_list(&mut ui, "Pick", &CHOICES, Some(0)).unwrap(), 0);
    }

    #[test]
    fn test_numeric_input_is_one_based() {
        let mut ui = ScriptedPrompter::new(["2"]);
        assert_eq!(ask_from_list(&mut ui, "Pick", &CHOICES, Some(0)).unwrap(), 1);
    }

    #[test]
    fn test_out_of_range_input_reprompts() {
        let mut ui = ScriptedPrompter::new(["5", "abc", "3"]);
        assert_eq!(ask_from_list(&mut ui, "Pick", &CHOICES, Some(0)).unwrap(), 2);
        assert_eq!(ui.prompts().len(), 3);
    }

    #[test]
    fn test_blank_without_default_reprompts() {
        let mut ui = ScriptedPrompter::new(["", "1"]);
        assert_eq!(ask_from_list(&mut ui, "Pick", &CHOICES, None).unwrap(), 0);
        assert_eq!(ui.prompts().len(), 2);
    }

    #[test]
    fn test_invalid_default_fails_before_reading_input() {
        let mut ui = ScriptedPrompter::new(["1"]);
        let result = ask_from_list(&mut ui, "Pick", &CHOICES, Some(5));
        assert!(matches!(
            result,
            Err(SetupError::InvalidDefaultIndex { index: 5, len: 3 })
        ));
        assert!(ui.prompts().is_empty());
        assert!(ui.transcript().is_empty());
    }

    #[test]
    fn test_renders_numbered_list_and_default() {
        let mut ui = ScriptedPrompter::new([""]);
        ask_from_list(&mut ui, "Pick one", &CHOICES, Some(1)).unwrap();

        assert_eq!(
            ui.transcript(),
            ["  1. first", "  2. second", "  3. third"]
        );
        assert_eq!(ui.prompts(), ["Pick one [2]"]);
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let mut ui = ScriptedPrompter::new(["9"]);
        let result = ask_from_list(&mut ui, "Pick", &CHOICES, None);
        assert!(matches!(result, Err(SetupError::InputExhausted)));
    }
}
