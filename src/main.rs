use clap::{Parser, Subcommand};
use git_upload::commands::*;
use git_upload::core::{
    error::{GitUploadError, Result},
    print_banner, print_error_with_hints, Palette, UploadConfig,
};

#[derive(Parser)]
#[command(name = "git-upload")]
#[command(about = "Stage, commit and push in one guided step")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Skip the startup check for a newer release
    #[arg(long, global = true)]
    no_update_check: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Check, stage, commit and push (default)
    Upload,
    /// Show the repository summary table only
    Status,
    /// Look up the latest release and compare versions
    CheckUpdate,
}

fn report_failure(error: &GitUploadError) -> ! {
    log::debug!("Exiting after error: {error:?}");
    print_error_with_hints(&error.to_string(), error.hints());
    std::process::exit(1);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag; RUST_LOG still wins when set
    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = UploadConfig::load_or_default();
    let style = config.table_style().with_palette(Palette::detect());

    match cli.command.unwrap_or(Commands::Upload) {
        Commands::Upload => {
            print_banner(CURRENT_VERSION);
            if !cli.no_update_check {
                check_for_updates(&mut config);
            }

            let options = UploadOptions {
                default_stage_mode: config.default_stage_mode,
                table_style: style,
            };
            match execute_upload(options) {
                Ok(WorkflowOutcome::Published(summary)) => {
                    log::debug!("Published: {summary:?}");
                }
                Ok(WorkflowOutcome::Cancelled) => {}
                Err(e) => report_failure(&e),
            }
        }
        Commands::Status => {
            if let Err(e) = execute_status(&style) {
                report_failure(&e);
            }
        }
        Commands::CheckUpdate => {
            if let Err(e) = execute_check_update(&config) {
                report_failure(&e);
            }
        }
    }

    Ok(())
}
