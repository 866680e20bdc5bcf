//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

pub fn identity_missing() -> impl Predicate<str> {
    predicates::str::contains("user name or email is not configured")
        .and(predicates::str::contains("git config --global user.name"))
}

pub fn no_remote() -> impl Predicate<str> {
    predicates::str::contains("No remote repository is configured")
        .and(predicates::str::contains("git remote add origin"))
}

/// The summary table was printed
pub fn has_summary_table() -> impl Predicate<str> {
    predicates::str::contains("Git repository summary")
        .and(predicates::str::contains("| Item"))
}

/// A table row whose label is `label`
pub fn has_row(label: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("| {label}"))
}
