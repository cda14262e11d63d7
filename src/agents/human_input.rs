use crate::chat::GroupMessage;
use crate::errors::{Error, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::ProgressBar;
use std::fmt::Debug;
use std::io::IsTerminal;
use std::sync::Arc;

/// Source of human replies for the user proxy
pub trait HumanInput: Debug + Send + Sync {
    /// Asks the human behind `agent` for a reply to `last_message`.
    ///
    /// Returns `None` when nobody can answer.
    fn ask(&self, agent: &str, last_message: Option<&GroupMessage>) -> Result<Option<String>>;
}

/// Reads replies from the controlling terminal.
///
/// Prompts are drawn on stderr so stdout keeps only the JSON result.
#[derive(Debug)]
pub struct TerminalInput {
    /// Spinner to hide while the prompt is on screen
    progress: ProgressBar,
}

impl TerminalInput {
    pub fn new(progress: ProgressBar) -> Self {
        Self { progress }
    }
}

impl HumanInput for TerminalInput {
    fn ask(&self, agent: &str, last_message: Option<&GroupMessage>) -> Result<Option<String>> {
        self.progress.suspend(|| {
            if let Some(msg) = last_message {
                eprintln!("\n{} {}", format!("{}:", msg.sender).bold().cyan(), msg.content);
            }
            eprintln!(
                "{}",
                "Press enter to skip, or type 'exit' to end the conversation.".yellow()
            );
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Reply as {}", agent))
                .allow_empty(true)
                .interact_text()
                .map(Some)
                .map_err(|e| Error::HumanInput(e.to_string()))
        })
    }
}

/// Used when stdin is not a terminal: nobody is there to answer
#[derive(Debug, Default)]
pub struct NoHumanInput;

impl HumanInput for NoHumanInput {
    fn ask(&self, _agent: &str, _last_message: Option<&GroupMessage>) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Picks the terminal when stdin is interactive, `NoHumanInput` otherwise
pub fn detect_human_input(progress: ProgressBar) -> Arc<dyn HumanInput> {
    if std::io::stdin().is_terminal() {
        Arc::new(TerminalInput::new(progress))
    } else {
        Arc::new(NoHumanInput)
    }
}
