use crate::core::{
    error::{GitUploadError, Result},
    executor::{CommandExecutor, ShellExecutor},
    git::Git,
    output::print_divider,
    status_parser::{parse, StatusReport},
    table::{render, TableStyle},
};

/// Collect git's output and turn it into a report
pub fn build_report<E: CommandExecutor + ?Sized>(git: &Git<'_, E>) -> StatusReport {
    parse(&git.raw_status())
}

/// Print the summary table between two dividers
pub fn display_report<E: CommandExecutor + ?Sized>(git: &Git<'_, E>, style: &TableStyle) {
    let report = build_report(git);
    print_divider();
    println!("{}", render(&report, style));
    print_divider();
}

pub fn execute_status(style: &TableStyle) -> Result<()> {
    let executor = ShellExecutor::new();
    let git = Git::new(&executor);

    if !git.is_inside_work_tree() {
        return Err(GitUploadError::NotInGitRepo);
    }

    display_report(&git, style);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::executor::ExecutionResult;
    use crate::core::git::cmd;
    use crate::core::status_parser::StatusCategory;

    struct StaticExecutor;

    impl CommandExecutor for StaticExecutor {
        fn execute(&self, command: &str) -> ExecutionResult {
            match command {
                cmd::VERSION => ExecutionResult::success("git version 2.43.0"),
                cmd::STATUS => ExecutionResult::success(
                    "On branch main\nChanges not staged for commit:\n\tmodified:   a.txt",
                ),
                cmd::STATUS_SHORT => ExecutionResult::success("## main\n M a.txt"),
                cmd::USER_NAME => ExecutionResult::success("Test User"),
                cmd::REMOTES_VERBOSE => {
                    ExecutionResult::success("origin\t/tmp/remote.git (fetch)")
                }
                _ => ExecutionResult::failure("unexpected"),
            }
        }
    }

    #[test]
    fn test_build_report_tolerates_failed_reads() {
        let git = Git::new(&StaticExecutor);
        let report = build_report(&git);

        assert_eq!(report.tool_version, "git version 2.43.0");
        assert_eq!(report.user_email, "");
        assert_eq!(report.remotes, "origin /tmp/remote.git (fetch)");
        assert_eq!(
            report
                .entries_in(StatusCategory::UnstagedChange)
                .collect::<Vec<_>>(),
            vec!["a.txt"]
        );
    }

    #[test]
    fn test_display_report_does_not_panic() {
        display_report(&Git::new(&StaticExecutor), &TableStyle::default());
    }
}
