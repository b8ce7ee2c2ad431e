// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deterministic fakes for the interactive capabilities, used across the
//! test modules of this crate.

use std::collections::VecDeque;

use crate::error::SubsumeResult;

use super::{InteractiveSelector, PromptProvider};

/// Prompt provider answering from a canned script; end of script is end of
/// input.
pub(crate) struct ScriptedPrompt {
    lines: VecDeque<String>,
}

impl ScriptedPrompt {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// A provider that immediately reports end of input.
    pub(crate) fn closed() -> Self {
        Self::new(&[])
    }
}

impl PromptProvider for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> SubsumeResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Selector that picks rows whose first tab-separated field matches one of
/// the configured keys. Records the rows it was shown.
pub(crate) struct StaticSelector {
    pick_keys: Vec<String>,
    pub(crate) last_rows: Option<Vec<String>>,
}

impl StaticSelector {
    pub(crate) fn picking(keys: &[&str]) -> Self {
        Self {
            pick_keys: keys.iter().map(|s| (*s).to_string()).collect(),
            last_rows: None,
        }
    }

    pub(crate) fn picking_nothing() -> Self {
        Self::picking(&[])
    }
}

impl InteractiveSelector for StaticSelector {
    fn select(&mut self, rows: &[String]) -> SubsumeResult<Vec<String>> {
        self.last_rows = Some(rows.to_vec());
        Ok(rows
            .iter()
            .filter(|row| {
                let key = row.split('\t').next().unwrap_or_default();
                self.pick_keys.iter().any(|k| k == key)
            })
            .cloned()
            .collect())
    }
}
