//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use anyhow::Result;

/// Repository with one pushed-nowhere commit, a bare `origin`, and pending changes:
/// a modified tracked file and an untracked one
pub fn create_repo_with_remote_and_changes() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    add_bare_remote(&repo)?;

    create_file(&repo.path, "initial.txt", "changed content\n")?;
    create_file(&repo.path, "notes.txt", "some notes\n")?;

    Ok(repo)
}

/// Repository with a bare `origin` and a clean working tree
pub fn create_clean_repo_with_remote() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    add_bare_remote(&repo)?;
    Ok(repo)
}
