//! Parsing of git's human-readable status output into a [`StatusReport`].
//!
//! Verbose `git status` output is split into sections by header lines such as
//! `Changes to be committed:`. [`SectionTracker`] walks the output one line at a time
//! and decides, for each line, whether it switches section, is advisory noise, or is
//! an entry belonging to the current section. A line's category comes only from the
//! nearest header above it, never from the line itself.
//!
//! Only git's English headers are recognized. Under another locale no header
//! matches and every category stays empty; nothing gets filed under the wrong one.

use std::fmt;

/// Display value used when the index is empty
pub const NO_STAGED_FILES: &str = "no staged files";

/// Section of verbose `git status` output an entry was listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    StagedChange,
    UnstagedChange,
    UntrackedFile,
    /// Sections without a dedicated category, e.g. unmerged paths
    Other,
}

impl StatusCategory {
    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::StagedChange => "Staged changes",
            StatusCategory::UnstagedChange => "Unstaged changes",
            StatusCategory::UntrackedFile => "Untracked files",
            StatusCategory::Other => "Other changes",
        }
    }

    /// Order in which categories are rendered
    pub const ALL: [StatusCategory; 4] = [
        StatusCategory::StagedChange,
        StatusCategory::UnstagedChange,
        StatusCategory::UntrackedFile,
        StatusCategory::Other,
    ];
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub category: StatusCategory,
    pub text: String,
}

impl StatusEntry {
    pub fn new(category: StatusCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

const SECTION_HEADERS: [(&str, StatusCategory); 4] = [
    ("Changes to be committed:", StatusCategory::StagedChange),
    ("Changes not staged for commit:", StatusCategory::UnstagedChange),
    ("Untracked files:", StatusCategory::UntrackedFile),
    ("Unmerged paths:", StatusCategory::Other),
];

const HINT_MARKER: &str = "(use ";

/// Trailing summary lines git prints flush-left after the last section
const SUMMARY_PREFIXES: [&str; 3] = [
    "no changes added to commit",
    "nothing added to commit",
    "nothing to commit",
];

const STRIPPED_PREFIXES: [&str; 2] = ["new file:", "modified:"];

/// What a single status line means to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Header(StatusCategory),
    Hint,
    Summary,
    Blank,
    Content(&'a str),
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        // Entries are indented, so a path that happens to read like a summary stays content
        let flush_left = !line.starts_with(char::is_whitespace);
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }
        if let Some((_, category)) = SECTION_HEADERS
            .iter()
            .find(|(header, _)| line.starts_with(header))
        {
            return LineKind::Header(*category);
        }
        if line.starts_with(HINT_MARKER) {
            return LineKind::Hint;
        }
        if flush_left && SUMMARY_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            return LineKind::Summary;
        }
        LineKind::Content(line)
    }
}

/// State machine over verbose status lines
#[derive(Debug, Default)]
pub struct SectionTracker {
    current: Option<StatusCategory>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_section(&self) -> Option<StatusCategory> {
        self.current
    }

    /// Feed one line; returns the entry it produces, if any
    pub fn step(&mut self, line: &str) -> Option<StatusEntry> {
        match LineKind::classify(line) {
            LineKind::Header(category) => {
                self.current = Some(category);
                None
            }
            LineKind::Summary => {
                self.current = None;
                None
            }
            LineKind::Hint | LineKind::Blank => None,
            LineKind::Content(text) => self
                .current
                .map(|category| StatusEntry::new(category, strip_change_prefix(text))),
        }
    }
}

/// `new file:   foo.txt` -> `foo.txt`
fn strip_change_prefix(text: &str) -> &str {
    STRIPPED_PREFIXES
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .map(str::trim)
        .unwrap_or(text)
}

/// Categorize every entry of verbose `git status` output, in order
pub fn categorize(detailed_status: &str) -> Vec<StatusEntry> {
    let mut tracker = SectionTracker::new();
    detailed_status
        .lines()
        .filter_map(|line| tracker.step(line))
        .collect()
}

/// Raw git output the report is assembled from
#[derive(Debug, Clone, Default)]
pub struct RawStatus {
    pub detailed_status: String,
    pub version: String,
    pub short_status: String,
    pub user_name: String,
    pub user_email: String,
    pub staged_files: String,
    pub remotes: String,
}

/// Structured view of the repository at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub tool_version: String,
    pub branch_summary: String,
    pub entries: Vec<StatusEntry>,
    pub user_name: String,
    pub user_email: String,
    pub staged_files: Vec<String>,
    pub remotes: String,
}

impl StatusReport {
    pub fn entries_in(&self, category: StatusCategory) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
            .map(|entry| entry.text.as_str())
    }
}

/// Build a report from raw git output
pub fn parse(raw: &RawStatus) -> StatusReport {
    let entries = categorize(&raw.detailed_status);

    let mut staged_files: Vec<String> = raw
        .staged_files
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    if staged_files.is_empty() {
        staged_files.push(NO_STAGED_FILES.to_string());
    }

    log::debug!(
        "Parsed status: {} entries, {} staged file(s)",
        entries.len(),
        staged_files.len()
    );

    StatusReport {
        tool_version: raw.version.trim().to_string(),
        branch_summary: raw.short_status.trim().to_string(),
        entries,
        user_name: raw.user_name.trim().to_string(),
        user_email: raw.user_email.trim().to_string(),
        staged_files,
        remotes: raw.remotes.trim().replace('\t', " "),
    }
}
