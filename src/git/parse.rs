// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsing of raw branch detail text into structured commit records.
//!
//! ```text
//! process_branch_data(branches, detail map)
//!   filter irrelevant branches (main/master/dev, sprint/ release/ hotfix/)
//!   parse_commit_details      "---" blocks -> commit messages
//!   extract_card_number       first digit run in the branch name
//!   drop branches with zero parsed messages
//!      |
//!      v
//! [BranchActivity { branchName, cardNumber, commitMessages }]
//! ```

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::BranchActivity;

/// First run of decimal digits anywhere in a branch name.
static CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("hard-coded pattern"));

/// Branch names that are exactly an integration branch.
const IRRELEVANT_BRANCHES: [&str; 3] = ["main", "master", "dev"];

/// Branch name prefixes marking shared integration/release branches.
const IRRELEVANT_PREFIXES: [&str; 3] = ["sprint/", "release/", "hotfix/"];

/// Extracts the work-item card number from a branch name.
///
/// The first run of decimal digits wins: `feature/1234-login` yields
/// `"1234"`, `release/2-v3` yields `"2"`, and a digitless name yields `""`.
#[must_use]
pub fn extract_card_number(branch_name: &str) -> String {
    CARD_NUMBER
        .find(branch_name)
        .map_or_else(String::new, |m| m.as_str().to_string())
}

/// Splits raw detail text into one trimmed message per commit.
///
/// Blocks are delimited by lines starting with `---`; the single marker line
/// following each delimiter (the `[branch-name]` tag emitted by the log
/// format) is skipped, and blank lines inside a block are dropped. Order
/// follows the input, i.e. most recent commit first.
#[must_use]
pub fn parse_commit_details(commits_output: &str) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    let mut in_commit = false;
    let mut skip_next_line = false;

    for line in commits_output.lines() {
        if line.starts_with("---") {
            // Finalize the previous commit, if any
            if !current.trim().is_empty() {
                messages.push(current.trim().to_string());
            }
            current.clear();
            in_commit = true;
            skip_next_line = true;
            continue;
        }

        // The [branch-name] marker line
        if skip_next_line {
            skip_next_line = false;
            continue;
        }

        if in_commit && !line.trim().is_empty() {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }

    if !current.trim().is_empty() {
        messages.push(current.trim().to_string());
    }

    messages
}

/// True when a branch represents individual work rather than a shared
/// integration or release branch. Comparison is on the lowercased name.
pub(crate) fn is_relevant_branch(branch_name: &str) -> bool {
    let name = branch_name.to_lowercase();
    !IRRELEVANT_BRANCHES.contains(&name.as_str())
        && !IRRELEVANT_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
}

/// Converts discovered branches plus their raw detail text into structured
/// activity records.
///
/// `details` maps branch name to non-empty detail text; branches absent from
/// the map parse to zero messages and are dropped, as is any branch whose
/// text parses to nothing.
#[must_use]
pub fn process_branch_data(
    branches: &[String],
    details: &BTreeMap<String, String>,
) -> Vec<BranchActivity> {
    branches
        .iter()
        .filter(|branch| is_relevant_branch(branch))
        .map(|branch| {
            let commit_messages = details
                .get(branch)
                .map_or_else(Vec::new, |output| parse_commit_details(output));

            BranchActivity {
                branch_name: branch.clone(),
                card_number: extract_card_number(branch),
                commit_messages,
            }
        })
        .filter(|branch| !branch.commit_messages.is_empty())
        .collect()
}
