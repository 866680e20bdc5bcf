use crate::core::config::{UpdateCheckConfig, UploadConfig};
use crate::core::error::{GitUploadError, Result};
use crate::core::{print_section_header, print_step, print_warning};
use anyhow::Context;
use colored::*;
use semver::Version;

const BIN_NAME: &str = "git-upload";
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Look up the newest published release tag
pub fn fetch_latest_version(config: &UpdateCheckConfig) -> anyhow::Result<String> {
    let release = self_update::backends::github::Update::configure()
        .repo_owner(&config.repo_owner)
        .repo_name(&config.repo_name)
        .bin_name(BIN_NAME)
        .show_output(false)
        .current_version(CURRENT_VERSION)
        .build()
        .context("configuring release lookup")?
        .get_latest_release()
        .context("fetching latest release")?;
    Ok(release.version)
}

fn parse_version(text: &str) -> Result<Version> {
    Version::parse(text.trim().trim_start_matches('v'))
        .map_err(|e| GitUploadError::UpdateCheck(format!("invalid version '{text}': {e}")))
}

pub fn needs_update(current: &str, latest: &str) -> Result<bool> {
    Ok(parse_version(latest)? > parse_version(current)?)
}

/// Best-effort notice printed at startup; never fails the run
pub fn check_for_updates(config: &mut UploadConfig) {
    let now = chrono::Utc::now();
    if !config.update_check.is_due(now) {
        log::debug!("Skipping update check (disabled or checked recently)");
        return;
    }

    match fetch_latest_version(&config.update_check) {
        Ok(latest) => match needs_update(CURRENT_VERSION, &latest) {
            Ok(true) => print_warning(&format!(
                "A new version is available: v{}, please update",
                latest.trim_start_matches('v')
            )),
            Ok(false) => print_step("git-upload is up to date"),
            Err(e) => print_warning(&e.to_string()),
        },
        Err(e) => {
            log::warn!("Update check failed: {e:#}");
            print_warning("Could not check for updates");
            return;
        }
    }

    if let Err(e) = config.record_update_check(now) {
        log::warn!("Could not record update check time: {e}");
    }
}

/// `git-upload check-update`: explicit lookup with version details
pub fn execute_check_update(config: &UploadConfig) -> Result<()> {
    let latest = fetch_latest_version(&config.update_check)
        .map_err(|e| GitUploadError::UpdateCheck(format!("{e:#}")))?;

    print_section_header("Version information");
    println!("   Current: {}", format!("v{CURRENT_VERSION}").blue());
    println!(
        "   Latest:  {}",
        format!("v{}", latest.trim_start_matches('v')).blue()
    );

    if needs_update(CURRENT_VERSION, &latest)? {
        println!("   Status:  {}\n", "Update available".yellow());
    } else {
        println!("   Status:  {}\n", "Up to date".green());
    }
    Ok(())
}
