use crate::core::error::GitUploadError;
use std::path::PathBuf;

const APP_DIR: &str = "git-upload";

pub fn get_config_directory() -> Result<PathBuf, GitUploadError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(GitUploadError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .ok_or(GitUploadError::ConfigDirectoryNotFound)?
            .join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(GitUploadError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}

pub fn get_config_file() -> Result<PathBuf, GitUploadError> {
    Ok(get_config_directory()?.join("config.json"))
}
