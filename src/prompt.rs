//! Confirm/notify capability handed to anything that needs to talk to the
//! user while mutating planner state.

use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

pub trait Prompter {
    /// Blocking yes/no question. `false` means "leave things as they are".
    fn confirm(&self, message: &str) -> bool;

    /// Non-blocking acknowledgment.
    fn notify(&self, message: &str);
}

/// Prompter backed by the terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> bool {
        match Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("confirm prompt failed, treating as no: {e}");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        println!("{} {}", "»".cyan().bold(), message);
    }
}
