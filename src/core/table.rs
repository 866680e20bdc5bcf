//! Two-column table rendering for the status report.
//!
//! [`render`] lays a [`StatusReport`] out as a bordered `Item | Status` table:
//!
//! ```text
//! +----------------------------------------+
//! |         Git repository summary         |
//! +----------------+-----------------------+
//! | Item           | Status                |
//! +----------------+-----------------------+
//! | Git version    | git version 2.43.0    |
//! | Untracked files| notes.txt             |
//! ...
//! ```
//!
//! Widths are measured in terminal columns with `unicode-width`, so CJK paths line up.
//! Values wider than [`TableStyle::max_width`] wrap onto extra lines with `textwrap`;
//! nothing is cut.
//! Output depends only on the report and the style.

use crate::core::colors::Palette;
use crate::core::status_parser::{StatusCategory, StatusReport};
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_TITLE: &str = "Git repository summary";
pub const DEFAULT_MAX_WIDTH: usize = 60;

/// Immutable rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub title: String,
    pub label_header: String,
    pub value_header: String,
    /// Widest a single column may grow, in terminal columns
    pub max_width: usize,
    pub palette: Palette,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            label_header: "Item".to_string(),
            value_header: "Status".to_string(),
            max_width: DEFAULT_MAX_WIDTH,
            palette: Palette::PLAIN,
        }
    }
}

impl TableStyle {
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

struct Row<'a> {
    label: &'a str,
    value: String,
    category: Option<StatusCategory>,
}

fn report_rows(report: &StatusReport) -> Vec<Row<'_>> {
    let mut rows = vec![
        Row {
            label: "Git version",
            value: report.tool_version.clone(),
            category: None,
        },
        Row {
            label: "Current status",
            value: report.branch_summary.clone(),
            category: None,
        },
    ];

    for category in StatusCategory::ALL {
        let entries: Vec<&str> = report.entries_in(category).collect();
        if entries.is_empty() {
            continue;
        }
        rows.push(Row {
            label: category.label(),
            value: entries.join("\n"),
            category: Some(category),
        });
    }

    rows.extend([
        Row {
            label: "User name",
            value: report.user_name.clone(),
            category: None,
        },
        Row {
            label: "User email",
            value: report.user_email.clone(),
            category: None,
        },
        Row {
            label: "Staged files",
            value: report.staged_files.join("\n"),
            category: None,
        },
        Row {
            label: "Remotes",
            value: report.remotes.clone(),
            category: None,
        },
    ]);

    rows
}

/// Split `text` into lines no wider than `max_width` columns
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let line = line.replace('\t', " ");
        lines.extend(
            textwrap::wrap(line.trim_end(), max_width)
                .into_iter()
                .map(|wrapped| wrapped.into_owned()),
        );
    }
    lines
}

fn pad(painted: String, plain_width: usize, width: usize) -> String {
    let mut cell = painted;
    for _ in plain_width..width {
        cell.push(' ');
    }
    cell
}

fn center(text: &str, width: usize) -> (usize, usize) {
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    (left, free - left)
}

/// Render the report as a bordered table
pub fn render(report: &StatusReport, style: &TableStyle) -> String {
    let palette = style.palette;
    let max_width = style.max_width.max(1);

    let wrapped: Vec<(Vec<String>, Vec<String>, Option<StatusCategory>)> = report_rows(report)
        .into_iter()
        .map(|row| {
            (
                wrap_text(row.label, max_width),
                wrap_text(&row.value, max_width),
                row.category,
            )
        })
        .collect();

    let header_label = wrap_text(&style.label_header, max_width);
    let header_value = wrap_text(&style.value_header, max_width);

    let widest = |lines: &[String]| lines.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut label_width = widest(&header_label);
    let mut value_width = widest(&header_value);
    for (label, value, _) in &wrapped {
        label_width = label_width.max(widest(label));
        value_width = value_width.max(widest(value));
    }

    // The title spans both columns plus the middle separator
    let title_width = style.title.width();
    if title_width > label_width + value_width + 3 {
        value_width = title_width - label_width - 3;
    }
    let inner_width = label_width + value_width + 3;

    let full_border = palette.border(&format!("+{}+", "-".repeat(inner_width + 2)));
    let split_border = palette.border(&format!(
        "+{}+{}+",
        "-".repeat(label_width + 2),
        "-".repeat(value_width + 2)
    ));
    let bar = palette.border("|");

    let mut out = Vec::new();

    out.push(full_border);
    let (left, right) = center(&style.title, inner_width);
    out.push(format!(
        "{bar} {}{}{} {bar}",
        " ".repeat(left),
        palette.title(&style.title),
        " ".repeat(right)
    ));
    out.push(split_border.clone());

    let push_row = |out: &mut Vec<String>,
                        labels: &[String],
                        values: &[String],
                        paint_label: &dyn Fn(&str) -> String,
                        paint_value: &dyn Fn(&str) -> String| {
        let height = labels.len().max(values.len());
        for i in 0..height {
            let label = labels.get(i).map(String::as_str).unwrap_or("");
            let value = values.get(i).map(String::as_str).unwrap_or("");
            out.push(format!(
                "{bar} {} {bar} {} {bar}",
                pad(paint_label(label), label.width(), label_width),
                pad(paint_value(value), value.width(), value_width),
            ));
        }
    };

    let plain = |text: &str| text.to_string();
    push_row(&mut out, &header_label, &header_value, &plain, &plain);
    out.push(split_border.clone());

    for (labels, values, category) in &wrapped {
        let paint_label = |text: &str| palette.label(text);
        let paint_value = |text: &str| match category {
            Some(category) => palette.category(*category, text),
            None => text.to_string(),
        };
        push_row(&mut out, labels, values, &paint_label, &paint_value);
    }
    out.push(split_border);

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status_parser::{parse, RawStatus, StatusEntry, NO_STAGED_FILES};

    fn sample_report() -> StatusReport {
        StatusReport {
            tool_version: "git version 2.43.0".to_string(),
            branch_summary: "## main...origin/main\nM  src/lib.rs".to_string(),
            entries: vec![
                StatusEntry::new(StatusCategory::StagedChange, "src/lib.rs"),
                StatusEntry::new(StatusCategory::StagedChange, "src/main.rs"),
                StatusEntry::new(StatusCategory::UntrackedFile, "notes.txt"),
            ],
            user_name: "Test User".to_string(),
            user_email: "test@example.com".to_string(),
            staged_files: vec!["src/lib.rs".to_string(), "src/main.rs".to_string()],
            remotes: "origin https://example.com/repo.git (fetch)".to_string(),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        let style = TableStyle::default();
        assert_eq!(render(&report, &style), render(&report, &style));
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let output = render(&sample_report(), &TableStyle::default());
        assert!(output.contains("Staged changes"));
        assert!(output.contains("Untracked files"));
        assert!(!output.contains("Unstaged changes"));
        assert!(!output.contains("Other changes"));
    }

    #[test]
    fn test_multi_entry_cell_keeps_order() {
        let output = render(&sample_report(), &TableStyle::default());
        let lib = output.find("| src/lib.rs").expect("lib.rs row");
        let main = output.find("| src/main.rs").expect("main.rs row");
        assert!(lib < main);
    }

    #[test]
    fn test_all_lines_have_equal_width() {
        let output = render(&sample_report(), &TableStyle::default());
        let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{output}");
    }

    #[test]
    fn test_long_values_wrap_without_loss() {
        let mut report = sample_report();
        let long_path = format!("src/{}/file.rs", "very_long_directory_name".repeat(5));
        report.entries = vec![StatusEntry::new(
            StatusCategory::UnstagedChange,
            long_path.clone(),
        )];
        let style = TableStyle::default().with_max_width(40);
        let output = render(&report, &style);

        for line in output.lines() {
            assert!(line.width() <= 40 * 2 + 7);
        }
        let rejoined: String = output
            .lines()
            .filter_map(|l| l.split('|').nth(2))
            .map(str::trim)
            .collect();
        assert!(rejoined.contains(&long_path));
    }

    #[test]
    fn test_title_is_present() {
        let style = TableStyle::default().with_title("Summary");
        let output = render(&sample_report(), &style);
        assert!(output.lines().nth(1).unwrap().contains("Summary"));
    }

    #[test]
    fn test_sentinel_staged_files() {
        let report = parse(&RawStatus::default());
        let output = render(&report, &TableStyle::default());
        assert!(output.contains(NO_STAGED_FILES));
    }

    #[test]
    fn test_plain_rows_stay_unpainted_with_colors() {
        let style = TableStyle::default().with_palette(Palette::COLORED);
        let output = render(&sample_report(), &style);
        let row = output
            .lines()
            .find(|line| line.contains("Test User"))
            .expect("user name row");
        assert!(row.contains(" Test User "), "{row:?}");
    }

    #[test]
    fn test_wrap_prefers_whitespace() {
        assert_eq!(
            wrap_text("alpha beta gamma", 11),
            vec!["alpha beta".to_string(), "gamma".to_string()]
        );
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        assert_eq!(
            wrap_text("abcdefghij", 4),
            vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
        );
    }

    #[test]
    fn test_wrap_counts_wide_characters() {
        let lines = wrap_text("日本語のファイル.txt", 8);
        assert!(lines.iter().all(|l| l.width() <= 8));
        assert_eq!(lines.concat(), "日本語のファイル.txt");
    }

    #[test]
    fn test_wrap_keeps_empty_value() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
