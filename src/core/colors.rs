//! Color palette for the status table.
//!
//! Colors are carried by value in a [`Palette`] instead of living in global state, so
//! the renderer can be driven with colors switched off (tests, pipes) without touching
//! anything process-wide.
//!
//! # Color Scheme
//! - **Staged**: Green
//! - **Unstaged**: Yellow
//! - **Untracked**: Cyan
//! - **Other**: Red (unmerged paths)
//! - **Labels**: Blue, title in bold white, borders bright black

use crate::core::status_parser::StatusCategory;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub const PLAIN: Palette = Palette { enabled: false };
    pub const COLORED: Palette = Palette { enabled: true };

    /// Colors on when stdout is a terminal
    pub fn detect() -> Self {
        use std::io::IsTerminal;
        Palette {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, |t| t.white().bold())
    }

    pub fn border(&self, text: &str) -> String {
        self.paint(text, |t| t.bright_black())
    }

    pub fn label(&self, text: &str) -> String {
        self.paint(text, |t| t.blue())
    }

    /// Color for a category's values
    pub fn category(&self, category: StatusCategory, text: &str) -> String {
        match category {
            StatusCategory::StagedChange => self.paint(text, |t| t.green()),
            StatusCategory::UnstagedChange => self.paint(text, |t| t.yellow()),
            StatusCategory::UntrackedFile => self.paint(text, |t| t.cyan()),
            StatusCategory::Other => self.paint(text, |t| t.red()),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::PLAIN
    }
}
