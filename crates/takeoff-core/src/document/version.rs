use crate::lexicon::{compile_or_skip, first_capture};
use crate::model::VersionInfo;
use regex::Regex;
use std::sync::LazyLock;

const DATE_PATTERNS: &[&str] = &[
    r"(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"(?:dated?|date)[:\s.]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
];

const REVISION_PATTERNS: &[&str] = &[
    r"(?:rev(?:ision)?[\s.]*#?(\d+)|#(\d+))",
    r"(?:revision|rev)[:\s.]*(.+?)(?:\n|\z)",
];

/// Labels introducing a project name in a title block, most specific first.
const PROJECT_LABELS: &[&str] = &["project name", "project title", "project"];

static DATES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(DATE_PATTERNS));
static REVISIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(REVISION_PATTERNS));

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| compile_or_skip(p)).collect()
}

/// Best-effort drawing date, revision and project name from document text.
pub fn find_version_info(text: &str) -> VersionInfo {
    VersionInfo {
        drawing_date: first_match(&DATES, text),
        revision: first_match(&REVISIONS, text),
        project_name: find_project_name(text),
    }
}

/// Capture of the first pattern (in order) that matches anywhere.
fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let value = first_capture(&caps).trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

fn find_project_name(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        PROJECT_LABELS
            .iter()
            .find_map(|label| extract_after_label(line, label))
    })
}

/// Extract the value after "<label>:" (case-insensitive).
/// Truncates at the next large whitespace gap (3+ spaces) so neighbouring
/// title-block fields are not captured.
fn extract_after_label(line: &str, label: &str) -> Option<String> {
    let lower = line.to_ascii_lowercase();
    let idx = lower.find(label)?;
    let after = line[idx + label.len()..].trim_start();
    let rest = after.strip_prefix(':')?.trim_start();
    let value = match rest.find("   ") {
        Some(gap_pos) => rest[..gap_pos].trim(),
        None => rest.trim(),
    };
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_block() {
        let text = "PROJECT NAME: MERCY CLINIC EXPANSION     SHEET M-101\n\
                    DATE: 03/15/2024\n\
                    REV 2 ISSUED FOR CONSTRUCTION";
        let info = find_version_info(text);
        assert_eq!(info.drawing_date.as_deref(), Some("03/15/2024"));
        assert_eq!(info.revision.as_deref(), Some("2"));
        assert_eq!(info.project_name.as_deref(), Some("MERCY CLINIC EXPANSION"));
    }

    #[test]
    fn test_hash_revision() {
        let info = find_version_info("ISSUE #4");
        assert_eq!(info.revision.as_deref(), Some("4"));
    }

    #[test]
    fn test_revision_label_fallback() {
        let info = find_version_info("REVISION: B - BID SET\nGENERAL NOTES");
        assert_eq!(info.revision.as_deref(), Some("B - BID SET"));
    }

    #[test]
    fn test_project_label_requires_colon() {
        assert_eq!(find_project_name("PROJECT NO 2231"), None);
        assert_eq!(
            find_project_name("Project: Riverside Lab").as_deref(),
            Some("Riverside Lab")
        );
    }

    #[test]
    fn test_nothing_found() {
        let info = find_version_info("AHU-1 3000 CFM");
        assert_eq!(info, VersionInfo::default());
    }
}
