// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive capabilities.
//!
//! ```text
//! PromptProvider (read_line, confirm)
//!      --> TtyPrompt       /dev/tty, production
//!      --> ScriptedPrompt  canned lines, tests
//!
//! InteractiveSelector (select)
//!      --> FzfSelector     fzf --multi, production
//!      --> StaticSelector  canned picks, tests
//! ```
//!
//! Prompts read from the controlling terminal, not stdin, so piping data
//! into the process does not interfere with interactive use. End of input
//! (`Ok(None)` from `read_line`) is the injected termination signal the
//! outer loop relies on.

pub mod fzf;
pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;


use crate::error::SubsumeResult;

pub use fzf::FzfSelector;
pub use terminal::TtyPrompt;

/// A source of operator answers.
pub trait PromptProvider {
    /// Display `prompt` (no trailing newline) and read one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The returned line has trailing
    /// newline characters stripped.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the prompt channel fails.
    fn read_line(&mut self, prompt: &str) -> SubsumeResult<Option<String>>;

    /// Ask a yes/no question. Empty input (and end of input) selects the
    /// default; unrecognized input re-prompts.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the prompt channel fails.
    fn confirm(&mut self, question: &str, default_yes: bool) -> SubsumeResult<bool> {
        let suffix = if default_yes { "[Y/n]" } else { "[y/N]" };
        loop {
            let Some(line) = self.read_line(&format!("{question} {suffix} "))? else {
                return Ok(default_yes);
            };
            match line.trim().to_lowercase().as_str() {
                "" => return Ok(default_yes),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {}
            }
        }
    }
}

/// A fuzzy multi-select over tab-separated rows.
pub trait InteractiveSelector {
    /// Present `rows` and return the subset the operator selected, in row
    /// order. An empty result is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the selection tool fails.
    fn select(&mut self, rows: &[String]) -> SubsumeResult<Vec<String>>;
}
