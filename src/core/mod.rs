//! Core functionality for the git-upload tool.
//!
//! This module provides the building blocks the workflow is assembled from: command
//! execution, the git command set, status parsing, table rendering and output.

pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod executor;
pub mod git;
pub mod output;
pub mod prompt;
pub mod status_parser;
pub mod table;

// === Error handling ===
pub use error::{GitUploadError, Result};

// === Command execution ===
// Shell execution with captured, trimmed output
pub use executor::{CommandExecutor, ExecutionResult, ShellExecutor};

// === Git operations ===
pub use git::{Git, StageMode};

// === Status parsing ===
// Section state machine turning `git status` text into categorized entries
pub use status_parser::{
    categorize, parse, RawStatus, SectionTracker, StatusCategory, StatusEntry, StatusReport,
};

// === Table rendering ===
pub use colors::Palette;
pub use table::{render, TableStyle};

// === Configuration ===
pub use config::UploadConfig;

// === Terminal input ===
pub use prompt::{Prompter, TerminalPrompter};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_banner, print_divider, print_error, print_error_with_hints, print_info,
    print_section_header, print_step, print_success, print_warning,
};
