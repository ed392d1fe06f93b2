use serde::Serialize;
use std::fmt::Write as _;

/// Kind of change reported for a single file by `git status --porcelain`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Untracked,
    Other,
}

impl ChangeKind {
    /// Classify a two-character `XY` status code. Earlier kinds win when both
    /// columns carry a letter, so `AM` counts as modified.
    pub fn classify(code: &str) -> Self {
        if code == "??" {
            Self::Untracked
        } else if code.contains('M') {
            Self::Modified
        } else if code.contains('A') {
            Self::Added
        } else if code.contains('D') {
            Self::Deleted
        } else if code.contains('R') {
            Self::Renamed
        } else if code.contains('C') {
            Self::Copied
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub kind: ChangeKind,
    /// Raw `XY` code as printed by git
    pub code: String,
    pub path: String,
}

/// Snapshot of a repository's working state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusRecord {
    pub branch: String,
    pub tracking: Option<String>,
    pub ahead: usize,
    pub behind: usize,
    pub stashes: usize,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChangeSummary {
    pub modified: usize,
    pub added: usize,
    pub deleted: usize,
    pub renamed: usize,
    pub copied: usize,
    pub untracked: usize,
    pub other: usize,
}

impl ChangeSummary {
    pub fn total(&self) -> usize {
        self.modified
            + self.added
            + self.deleted
            + self.renamed
            + self.copied
            + self.untracked
            + self.other
    }

    /// Short per-kind breakdown, e.g. `2 modified, 1 untracked`
    pub fn describe(&self) -> String {
        let parts = [
            (self.modified, "modified"),
            (self.added, "added"),
            (self.deleted, "deleted"),
            (self.renamed, "renamed"),
            (self.copied, "copied"),
            (self.untracked, "untracked"),
            (self.other, "other"),
        ];
        let mut out = String::new();
        for (count, label) in parts.into_iter().filter(|(count, _)| *count > 0) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            let _ = write!(out, "{count} {label}");
        }
        out
    }
}

impl StatusRecord {
    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }

    pub fn summary(&self) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        for file in &self.files {
            let slot = match file.kind {
                ChangeKind::Modified => &mut summary.modified,
                ChangeKind::Added => &mut summary.added,
                ChangeKind::Deleted => &mut summary.deleted,
                ChangeKind::Renamed => &mut summary.renamed,
                ChangeKind::Copied => &mut summary.copied,
                ChangeKind::Untracked => &mut summary.untracked,
                ChangeKind::Other => &mut summary.other,
            };
            *slot += 1;
        }
        summary
    }
}

/// Parse `git status --porcelain` (v1) output.
/// Lines look like `XY path`; the leading column may be a space, so the
/// output must not be trimmed before parsing.
pub fn parse_porcelain_status(output: &str) -> Vec<FileEntry> {
    output
        .lines()
        .filter_map(|line| {
            let code = line.get(..2)?;
            let path = line.get(3..)?.trim_end();
            if path.is_empty() {
                return None;
            }
            Some(FileEntry {
                kind: ChangeKind::classify(code),
                code: code.to_string(),
                path: path.to_string(),
            })
        })
        .collect()
}

/// Parse `git rev-list --count --left-right <upstream>...HEAD`, which prints
/// `<behind>\t<ahead>`. Returns `(ahead, behind)`.
pub fn parse_left_right_counts(output: &str) -> Option<(usize, usize)> {
    let mut parts = output.split_whitespace();
    let behind = parts.next()?.parse().ok()?;
    let ahead = parts.next()?.parse().ok()?;
    Some((ahead, behind))
}

pub fn count_stashes(output: &str) -> usize {
    output.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_codes() {
        assert_eq!(ChangeKind::classify(" M"), ChangeKind::Modified);
        assert_eq!(ChangeKind::classify("M "), ChangeKind::Modified);
        assert_eq!(ChangeKind::classify("AM"), ChangeKind::Modified);
        assert_eq!(ChangeKind::classify("A "), ChangeKind::Added);
        assert_eq!(ChangeKind::classify(" D"), ChangeKind::Deleted);
        assert_eq!(ChangeKind::classify("R "), ChangeKind::Renamed);
        assert_eq!(ChangeKind::classify("C "), ChangeKind::Copied);
        assert_eq!(ChangeKind::classify("??"), ChangeKind::Untracked);
        assert_eq!(ChangeKind::classify("UU"), ChangeKind::Other);
    }

    #[test]
    fn test_parse_porcelain_keeps_leading_space_lines() {
        let output = " M src/main.rs\n?? notes.txt\nR  old.rs -> new.rs\n";
        let files = parse_porcelain_status(output);
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].path, "src/main.rs");
        assert_eq!(files[0].code, " M");
        assert_eq!(files[0].kind, ChangeKind::Modified);
        assert_eq!(files[1].kind, ChangeKind::Untracked);
        assert_eq!(files[2].kind, ChangeKind::Renamed);
        assert_eq!(files[2].path, "old.rs -> new.rs");
    }

    #[test]
    fn test_parse_porcelain_skips_malformed_lines() {
        let files = parse_porcelain_status("\nM\n?? \n");
        assert!(files.is_empty());
    }

    #[test]
    fn test_parse_left_right_counts() {
        assert_eq!(parse_left_right_counts("3\t5\n"), Some((5, 3)));
        assert_eq!(parse_left_right_counts("0\t0"), Some((0, 0)));
        assert_eq!(parse_left_right_counts(""), None);
        assert_eq!(parse_left_right_counts("x\t1"), None);
    }

    #[test]
    fn test_count_stashes() {
        let output = "stash@{0}: WIP on main: abc\nstash@{1}: On main: def\n";
        assert_eq!(count_stashes(output), 2);
        assert_eq!(count_stashes(""), 0);
    }

    #[test]
    fn test_summary_counts_and_description() {
        let record = StatusRecord {
            branch: "main".into(),
            files: parse_porcelain_status(" M a\nM  b\n?? c\n D d\n"),
            ..StatusRecord::default()
        };
        let summary = record.summary();
        assert_eq!(summary.modified, 2);
        assert_eq!(summary.untracked, 1);
        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.describe(), "2 modified, 1 deleted, 1 untracked");
        assert!(!record.is_clean());
    }

    #[test]
    fn test_record_serializes_kinds_lowercase() {
        let record = StatusRecord {
            branch: "main".into(),
            files: parse_porcelain_status("?? new.txt\n"),
            ..StatusRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["files"][0]["kind"], "untracked");
        assert_eq!(json["tracking"], serde_json::Value::Null);
    }
}
