use super::Prompter;
use crate::error::{Result, SetupError};
use std::collections::VecDeque;

/// Prompter fed from a fixed list of answers.
///
/// Records every line shown and every prompt asked so callers can assert on
/// the interaction. Running out of answers is reported as
/// [`SetupError::InputExhausted`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    warnings: Vec<String>,
    prompts: Vec<String>,
    secret_prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Lines passed to `say`
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Plain prompts, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Prompts read with echo suppressed
    pub fn secret_prompts(&self) -> &[String] {
        &self.secret_prompts
    }

    /// Total number of questions asked, plain and secret
    pub fn questions_asked(&self) -> usize {
        self.prompts.len() + self.secret_prompts.len()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self) -> Result<String> {
        self.answers.pop_front().ok_or(SetupError::InputExhausted)
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.next_answer()
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        self.secret_prompts.push(prompt.to_string());
        self.next_answer()
    }
}
