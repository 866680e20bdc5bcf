//! The guided "stage, commit, push" workflow.
//!
//! [`UploadWorkflow::run`] moves through preflight checks, the status table, two
//! prompts, and the three mutating git steps. A step never starts after its
//! predecessor failed: a failed stage stops before the commit, a failed commit stops
//! before the push. The only automatic recovery is a single `--set-upstream` retry
//! when a push is rejected because the branch has no upstream yet.

use crate::commands::status::display_report;
use crate::core::{
    error::{GitUploadError, Result},
    executor::{CommandExecutor, ExecutionResult, ShellExecutor},
    git::{is_missing_upstream, Git, StageMode},
    output::{
        format_staged_list, print_divider, print_info, print_section_header, print_step,
        print_success, print_warning,
    },
    prompt::{Prompter, TerminalPrompter},
    table::TableStyle,
};

/// Input that cancels the workflow at the commit message prompt
pub const CANCEL_TOKEN: &str = "q";

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub default_stage_mode: StageMode,
    pub table_style: TableStyle,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            default_stage_mode: StageMode::Changed,
            table_style: TableStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    pub stage_mode: StageMode,
    pub committed_files: usize,
    /// The push needed the `--set-upstream` retry
    pub upstream_created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Published(PublishSummary),
    Cancelled,
}

/// Identity, repository and remote checks; any failure ends the run
pub fn preflight<E: CommandExecutor + ?Sized>(git: &Git<'_, E>) -> Result<()> {
    let name = git.user_name();
    let email = git.user_email();
    if name.is_empty() || email.is_empty() {
        return Err(GitUploadError::IdentityNotConfigured);
    }
    print_step(&format!("Git identity: {name} <{email}>"));

    if !git.is_inside_work_tree() {
        return Err(GitUploadError::NotInGitRepo);
    }
    print_step("Current directory is a git repository");

    if git.remotes().is_empty() {
        return Err(GitUploadError::NoRemoteConfigured);
    }
    print_step("Remote repository configured");

    Ok(())
}

/// `1` stages changed files, `2` everything; anything else takes the default
pub fn parse_stage_choice(input: &str, default: StageMode) -> StageMode {
    match input.trim() {
        "1" => StageMode::Changed,
        "2" => StageMode::All,
        _ => default,
    }
}

pub fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CANCEL_TOKEN)
}

pub struct UploadWorkflow<'a, E: CommandExecutor + ?Sized, P: Prompter + ?Sized> {
    git: Git<'a, E>,
    prompter: &'a mut P,
    options: UploadOptions,
}

impl<'a, E: CommandExecutor + ?Sized, P: Prompter + ?Sized> UploadWorkflow<'a, E, P> {
    pub fn new(executor: &'a E, prompter: &'a mut P, options: UploadOptions) -> Self {
        Self {
            git: Git::new(executor),
            prompter,
            options,
        }
    }

    pub fn run(&mut self) -> Result<WorkflowOutcome> {
        preflight(&self.git)?;

        display_report(&self.git, &self.options.table_style);

        let Some(stage_mode) = self.select_stage_mode()? else {
            return Ok(self.cancel());
        };
        let Some(message) = self.read_commit_message()? else {
            return Ok(self.cancel());
        };

        self.stage(stage_mode)?;
        let committed_files = self.commit(&message)?;
        let (push, upstream_created) = self.push()?;

        self.show_summary(&push, committed_files);

        Ok(WorkflowOutcome::Published(PublishSummary {
            stage_mode,
            committed_files,
            upstream_created,
        }))
    }

    fn cancel(&self) -> WorkflowOutcome {
        print_info("Cancelled, nothing was committed");
        log::info!("Workflow cancelled by user");
        WorkflowOutcome::Cancelled
    }

    fn select_stage_mode(&mut self) -> Result<Option<StageMode>> {
        let default = self.options.default_stage_mode;
        let question = format!(
            "Stage which files? (1: changed files only, 2: all files including deletions) [{}]:",
            match default {
                StageMode::Changed => "1",
                StageMode::All => "2",
            }
        );
        Ok(self
            .prompter
            .ask(&question)?
            .map(|input| parse_stage_choice(&input, default)))
    }

    fn read_commit_message(&mut self) -> Result<Option<String>> {
        loop {
            let Some(input) = self.prompter.ask("Commit message (q to quit):")? else {
                return Ok(None);
            };
            if is_cancel(&input) {
                return Ok(None);
            }
            let message = input.trim();
            if !message.is_empty() {
                return Ok(Some(message.to_string()));
            }
            print_warning("Commit message cannot be empty");
        }
    }

    fn stage(&self, mode: StageMode) -> Result<()> {
        print_divider();
        print_step(&format!("Staging {}...", mode.description()));

        let result = self.git.stage(mode);
        if !result.succeeded {
            return Err(GitUploadError::stage_failed(result.stderr));
        }

        print_section_header("Staged files");
        println!("{}", format_staged_list(&self.git.staged_files()));
        Ok(())
    }

    /// Returns how many files went into the commit
    fn commit(&self, message: &str) -> Result<usize> {
        let committed_files = self.git.staged_files().len();

        print_divider();
        print_step(&format!("Committing: {message}"));

        let result = self.git.commit(message);
        if !result.succeeded {
            // git reports "nothing to commit" on stdout
            let reason = if result.stderr.is_empty() {
                result.stdout
            } else {
                result.stderr
            };
            return Err(GitUploadError::commit_failed(reason));
        }

        log::debug!("Committed {committed_files} file(s)");
        Ok(committed_files)
    }

    fn push(&self) -> Result<(ExecutionResult, bool)> {
        print_divider();
        print_step("Pushing to remote...");

        let first = self.git.push();
        if first.succeeded {
            return Ok((first, false));
        }
        if !is_missing_upstream(&first.stderr) {
            return Err(GitUploadError::push_failed(first.stderr));
        }

        let (Some(remote), Some(branch)) = (self.git.push_remote(), self.git.current_branch())
        else {
            return Err(GitUploadError::push_failed(first.stderr));
        };

        print_warning(&format!(
            "Branch has no upstream, pushing with --set-upstream {remote} {branch}"
        ));
        let retry = self.git.push_set_upstream(&remote, &branch);
        if retry.succeeded {
            Ok((retry, true))
        } else {
            Err(GitUploadError::push_failed(retry.stderr))
        }
    }

    /// Informational only; nothing here can fail the run
    fn show_summary(&self, push: &ExecutionResult, committed_files: usize) {
        print_success("Push succeeded");
        let details = push.output_text();
        if !details.is_empty() {
            println!("{details}");
        }

        let last_commit = self.git.last_commit();
        if last_commit.is_empty() {
            print_warning("Could not read the latest commit");
        } else {
            print_section_header("Latest commit");
            println!("{last_commit}");
        }

        print_success(&format!("Files in this commit: {committed_files}"));
        print_divider();
    }
}

pub fn execute_upload(options: UploadOptions) -> Result<WorkflowOutcome> {
    let executor = ShellExecutor::new();
    let mut prompter = TerminalPrompter::stdin();
    UploadWorkflow::new(&executor, &mut prompter, options).run()
}
