//! git-upload - stage, commit and push in one guided step.
//!
//! This library holds everything the `git-upload` binary does: running git, parsing its
//! status output into a categorized report, rendering that report as a table, and the
//! interactive publish workflow built on top.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Shell command execution ([`CommandExecutor`])
//! - Status parsing ([`parse`], [`categorize`])
//! - Table rendering ([`render`], [`TableStyle`])
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use self::core::{
    categorize,
    // Command execution
    CommandExecutor,
    ExecutionResult,
    Git,
    // Error handling
    GitUploadError,
    Palette,
    parse,
    Prompter,
    RawStatus,
    render,
    Result,
    SectionTracker,
    ShellExecutor,
    StageMode,
    // Status report
    StatusCategory,
    StatusEntry,
    StatusReport,
    // Rendering
    TableStyle,
    UploadConfig,
};
