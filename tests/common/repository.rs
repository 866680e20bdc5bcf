//! Git repository management and setup utilities
//!
//! Provides functions for creating isolated test repositories, bare remotes, and a
//! `git-upload` command wired to them. Every git process runs with a private `HOME`
//! so the developer's global git config (identity, signing, push defaults) never
//! leaks into a test.

#![allow(dead_code)]

use anyhow::{bail, Result};
use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    /// Working tree
    pub path: PathBuf,
    /// Private HOME / XDG_CONFIG_HOME for every spawned process
    pub home: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the bare remote created by [`add_bare_remote`]
    pub fn remote_path(&self) -> PathBuf {
        self.temp_dir.path().join("remote.git")
    }
}

fn isolate(cmd: &mut Command, home: &Path, ceiling: &Path) {
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env("NO_COLOR", "1");
}

/// Run git in `dir` with the test's isolated environment
pub fn git(repo: &TestRepo, dir: &Path, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(dir);
    isolate(&mut cmd, &repo.home, repo.temp_dir.path());

    let output = cmd.output()?;
    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Creates an empty, isolated directory that is not a repository
pub fn setup_plain_dir() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("work");
    let home = temp_dir.path().join("home");
    fs::create_dir_all(&path)?;
    fs::create_dir_all(&home)?;

    Ok(TestRepo {
        temp_dir,
        path,
        home,
    })
}

/// Sets up a fresh git repository without any identity configured
pub fn setup_test_repo_without_identity() -> Result<TestRepo> {
    let repo = setup_plain_dir()?;
    git(&repo, &repo.path, &["init"])?;
    Ok(repo)
}

/// Sets up a fresh git repository with a local identity
pub fn setup_test_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_without_identity()?;
    git(&repo, &repo.path, &["config", "user.name", "Test User"])?;
    git(&repo, &repo.path, &["config", "user.email", "test@example.com"])?;
    Ok(repo)
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git(&repo, &repo.path, &["add", "initial.txt"])?;
    git(&repo, &repo.path, &["commit", "-m", "Initial commit"])?;
    Ok(repo)
}

/// Creates a bare repository next to the working tree and adds it as `origin`
pub fn add_bare_remote(repo: &TestRepo) -> Result<()> {
    let remote = repo.remote_path();
    let remote_str = remote.to_string_lossy().to_string();
    git(repo, repo.temp_dir.path(), &["init", "--bare", &remote_str])?;
    git(repo, &repo.path, &["remote", "add", "origin", &remote_str])?;
    Ok(())
}

/// Commit subjects in the bare remote, newest first
pub fn remote_log(repo: &TestRepo) -> Result<String> {
    let remote = repo.remote_path();
    let git_dir = format!("--git-dir={}", remote.display());
    git(repo, repo.temp_dir.path(), &[&git_dir, "log", "--all", "--format=%s"])
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

/// `git-upload` running inside the test repository, update check disabled
pub fn git_upload(repo: &TestRepo) -> Result<assert_cmd::Command> {
    let mut cmd = Command::cargo_bin("git-upload")?;
    cmd.current_dir(&repo.path).arg("--no-update-check");
    isolate(&mut cmd, &repo.home, repo.temp_dir.path());
    Ok(assert_cmd::Command::from_std(cmd))
}
