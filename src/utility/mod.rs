// subsume: Nested Git Repository Converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   move_dir()           rename, copy+remove fallback
//!   copy_dir_contents()  recursive directory copy
//! ```

pub mod fs;
