// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Controlling-terminal prompt provider.
//!
//! Reads and writes `/dev/tty` directly. Stdin stays untouched so the
//! process can be part of a pipeline without the prompts competing with
//! piped data.

use colored::Colorize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};

use crate::error::{PromptError, SubsumeResult};

use super::PromptProvider;

/// Production prompt provider backed by the controlling terminal.
pub struct TtyPrompt {
    reader: BufReader<File>,
    writer: File,
}

impl TtyPrompt {
    /// Open the controlling terminal for reading and writing.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::TtyUnavailable` when the process has no
    /// controlling terminal (non-interactive environments).
    pub fn new() -> SubsumeResult<Self> {
        let reader = File::open("/dev/tty").map_err(PromptError::TtyUnavailable)?;
        let writer = OpenOptions::new()
            .write(true)
            .open("/dev/tty")
            .map_err(PromptError::TtyUnavailable)?;
        Ok(Self {
            reader: BufReader::new(reader),
            writer,
        })
    }
}

impl PromptProvider for TtyPrompt {
    fn read_line(&mut self, prompt: &str) -> SubsumeResult<Option<String>> {
        write!(self.writer, "{}", prompt.cyan().bold()).map_err(PromptError::Io)?;
        self.writer.flush().map_err(PromptError::Io)?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line).map_err(PromptError::Io)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
