// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process-spawning machinery.
//!
//! ```text
//!          core
//!           |
//!           v
//!        process
//!           |
//!        Builder
//!        Output
//! ```

pub mod process;
