use super::Prompter;
use crate::error::{Result, SetupError};
use dialoguer::{Input, Password};
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompter attached to the controlling terminal.
///
/// When stdin or stderr is not a terminal (piped input, scripts), answers
/// are read line by line from stdin instead, and secrets are read the same
/// way since there is no echo to suppress.
#[derive(Debug)]
pub struct TerminalPrompter {
    attended: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            attended: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn read_line(&self, prompt: &str) -> Result<String> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(SetupError::InputExhausted);
        }
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn say(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        eprintln!("⚠ {}", message);
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        if !self.attended {
            return self.read_line(prompt);
        }

        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        if !self.attended {
            return self.read_line(prompt);
        }

        let input = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(input)
    }
}
