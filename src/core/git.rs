//! Git command set used by git-upload.
//!
//! [`Git`] wraps a [`CommandExecutor`] and exposes one method per git invocation the
//! tool depends on. Read-only queries return plain text (empty when git fails);
//! mutating operations return the full [`ExecutionResult`] so the workflow can
//! inspect every failure.
//!
//! All command lines live in [`cmd`] so tests can match on them.

use crate::core::executor::{CommandExecutor, ExecutionResult};
use crate::core::status_parser::RawStatus;
use std::borrow::Cow;

/// Literal git command lines
pub mod cmd {
    pub const VERSION: &str = "git --version";
    pub const STATUS_SHORT: &str = "git status --short --branch";
    pub const STATUS: &str = "git status";
    pub const USER_NAME: &str = "git config user.name";
    pub const USER_EMAIL: &str = "git config user.email";
    pub const INSIDE_WORK_TREE: &str = "git rev-parse --is-inside-work-tree";
    pub const REMOTES_VERBOSE: &str = "git remote -v";
    pub const REMOTE_NAMES: &str = "git remote";
    pub const STAGED_FILES: &str = "git diff --cached --name-only";
    pub const ADD_CHANGED: &str = "git add .";
    pub const ADD_ALL: &str = "git add -A";
    pub const COMMIT: &str = "git commit -m";
    pub const PUSH: &str = "git push";
    pub const PUSH_SET_UPSTREAM: &str = "git push --set-upstream";
    pub const CURRENT_BRANCH: &str = "git rev-parse --abbrev-ref HEAD";
    pub const LAST_COMMIT: &str = "git log -1 --stat";
}

/// Which changes `git add` picks up
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageMode {
    /// New and modified files (`git add .`)
    Changed,
    /// Everything including deletions (`git add -A`)
    All,
}

impl StageMode {
    pub fn command(self) -> &'static str {
        match self {
            StageMode::Changed => cmd::ADD_CHANGED,
            StageMode::All => cmd::ADD_ALL,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StageMode::Changed => "changed files",
            StageMode::All => "all files (including deletions)",
        }
    }
}

pub struct Git<'a, E: CommandExecutor + ?Sized> {
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> Git<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Git { executor }
    }

    fn read(&self, command: &str) -> String {
        self.executor.execute(command).stdout_or_empty().to_string()
    }

    pub fn version(&self) -> String {
        self.read(cmd::VERSION)
    }

    pub fn short_status(&self) -> String {
        self.read(cmd::STATUS_SHORT)
    }

    pub fn detailed_status(&self) -> String {
        self.read(cmd::STATUS)
    }

    pub fn user_name(&self) -> String {
        self.read(cmd::USER_NAME)
    }

    pub fn user_email(&self) -> String {
        self.read(cmd::USER_EMAIL)
    }

    pub fn is_inside_work_tree(&self) -> bool {
        let result = self.executor.execute(cmd::INSIDE_WORK_TREE);
        result.succeeded && result.stdout == "true"
    }

    pub fn remotes(&self) -> String {
        self.read(cmd::REMOTES_VERBOSE)
    }

    /// Remote to push a new upstream to: `origin` when present, else the first one
    pub fn push_remote(&self) -> Option<String> {
        let names = self.read(cmd::REMOTE_NAMES);
        let names: Vec<&str> = names.lines().map(str::trim).filter(|n| !n.is_empty()).collect();
        names
            .iter()
            .find(|name| **name == "origin")
            .or_else(|| names.first())
            .map(|name| name.to_string())
    }

    pub fn current_branch(&self) -> Option<String> {
        let branch = self.read(cmd::CURRENT_BRANCH);
        if branch.is_empty() || branch == "HEAD" {
            None
        } else {
            Some(branch)
        }
    }

    /// Paths currently in the index
    pub fn staged_files(&self) -> Vec<String> {
        self.read(cmd::STAGED_FILES)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn last_commit(&self) -> String {
        self.read(cmd::LAST_COMMIT)
    }

    /// Collect every text the status report is built from
    pub fn raw_status(&self) -> RawStatus {
        RawStatus {
            detailed_status: self.detailed_status(),
            version: self.version(),
            short_status: self.short_status(),
            user_name: self.user_name(),
            user_email: self.user_email(),
            staged_files: self.read(cmd::STAGED_FILES),
            remotes: self.remotes(),
        }
    }

    pub fn stage(&self, mode: StageMode) -> ExecutionResult {
        self.executor.execute(mode.command())
    }

    pub fn commit(&self, message: &str) -> ExecutionResult {
        self.executor.execute(&commit_command(message))
    }

    pub fn push(&self) -> ExecutionResult {
        self.executor.execute(cmd::PUSH)
    }

    pub fn push_set_upstream(&self, remote: &str, branch: &str) -> ExecutionResult {
        self.executor.execute(&format!(
            "{} {} {}",
            cmd::PUSH_SET_UPSTREAM,
            quote(remote),
            quote(branch)
        ))
    }
}

fn quote(text: &str) -> Cow<'_, str> {
    shell_escape::escape(Cow::Borrowed(text))
}

/// Build the commit command line with the message quoted for the shell
pub fn commit_command(message: &str) -> String {
    format!("{} {}", cmd::COMMIT, quote(message))
}

/// Whether a failed push was rejected only because the branch has no upstream
pub fn is_missing_upstream(stderr: &str) -> bool {
    stderr.contains("has no upstream branch") || stderr.contains("--set-upstream")
}
