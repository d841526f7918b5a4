// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Collapsing of sub-test names.
//!
//! Sharded and parameterized tests report both the parent (`suite`) and each
//! child (`suite/case_1`). Counting both would double-count one failure, so
//! only the outermost name of each family is kept.
//!
//! ```text
//! ["c", "a/b", "a", "a"]
//!   sort + dedup    ["a", "a/b", "c"]
//!   drop children   ["a", "c"]
//! ```

use std::collections::HashSet;

/// Sort, deduplicate and drop every name whose `parent/` ancestor is kept.
///
/// The result is sorted, and no name in it is a strict path-prefix ancestor of
/// another. Applying the filter twice gives the same result.
#[must_use]
pub fn filter_tests<S: AsRef<str>>(tests: &[S]) -> Vec<String> {
    let mut sorted: Vec<&str> = tests.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut kept: HashSet<&str> = HashSet::with_capacity(sorted.len());
    let mut result = Vec::with_capacity(sorted.len());

    // Ancestors sort before their descendants, so every candidate ancestor of
    // `name` has already been decided.
    for name in sorted {
        if has_kept_ancestor(name, &kept) {
            continue;
        }
        kept.insert(name);
        result.push(name.to_string());
    }

    result
}

fn has_kept_ancestor(name: &str, kept: &HashSet<&str>) -> bool {
    name.match_indices('/')
        .any(|(idx, _)| kept.contains(&name[..idx]))
}
