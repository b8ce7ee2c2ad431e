// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fuzzy multi-select backed by fzf.
//!
//! ```text
//! rows --> stdin --> fzf --multi (UI on the tty) --> stdout --> selection
//! ```
//!
//! Exit codes: 0 = selection made, 1 = nothing matched, 130 = interrupted.
//! The latter two are empty selections, not errors.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::{PromptError, SubsumeResult};

use super::InteractiveSelector;

/// Production selector invoking the fzf binary.
pub struct FzfSelector {
    program: PathBuf,
}

impl FzfSelector {
    /// Locate the selector binary on PATH.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::ToolMissing` when the binary cannot be found;
    /// callers treat this as a fatal environment failure.
    pub fn locate(tool: &str) -> SubsumeResult<Self> {
        let program = which::which(tool).map_err(|_| PromptError::ToolMissing {
            tool: tool.to_string(),
        })?;
        debug!(program = %program.display(), "selector located");
        Ok(Self { program })
    }
}

impl InteractiveSelector for FzfSelector {
    fn select(&mut self, rows: &[String]) -> SubsumeResult<Vec<String>> {
        let mut child = Command::new(&self.program)
            .args(["--multi", "--delimiter", "\t"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(PromptError::Io)?;

        {
            let Some(mut stdin) = child.stdin.take() else {
                return Err(PromptError::Selector {
                    message: "selector stdin unavailable".to_string(),
                }
                .into());
            };
            for row in rows {
                writeln!(stdin, "{row}").map_err(PromptError::Io)?;
            }
        }

        let output = child.wait_with_output().map_err(PromptError::Io)?;
        match output.status.code() {
            Some(0) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                Ok(stdout.lines().map(str::to_string).collect())
            }
            // 1: no match / nothing picked. 130: interrupted by the operator.
            Some(1 | 130) => Ok(Vec::new()),
            code => Err(PromptError::Selector {
                message: format!("selector exited with {code:?}"),
            }
            .into()),
        }
    }
}
