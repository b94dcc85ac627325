use crate::lexicon::compile_or_skip;
use crate::model::SpecSection;
use regex::Regex;
use std::sync::LazyLock;

const MAX_CONTENT_CHARS: usize = 500;

/// How a section pattern maps its groups onto a `SpecSection`.
struct SectionPattern {
    pattern: &'static str,
    reference_group: usize,
    content_group: usize,
}

// The trailing alternation marks where the content stops. It is consumed
// by the match but scanning resumes right after the content group, so a
// terminating "SECTION" still starts the next match.
const SECTION_PATTERNS: &[SectionPattern] = &[
    // "SECTION 23 05 00 - COMMON WORK RESULTS FOR HVAC"
    SectionPattern {
        pattern: r"(?s)(?:section|sect|div)[\s.]*(\d{2}\s*[\d\-.]*\s*\d{2,4})[:\s.]*(.+?)(?:section|sect|div|\n\n|\z)",
        reference_group: 1,
        content_group: 2,
    },
    // bare MasterFormat numbers: "23 0713 DUCT INSULATION"
    SectionPattern {
        pattern: r"(?s)(?:23\s*\d{4}|22\s*\d{4}|26\s*\d{4}|27\s*\d{4})[-–]?\s*([A-Za-z0-9\s\-,]+?)(?:\n\n|\d{2}\s*\d{4}|\n?\z)",
        reference_group: 1,
        content_group: 1,
    },
];

static COMPILED: LazyLock<Vec<(Regex, usize, usize)>> = LazyLock::new(|| {
    SECTION_PATTERNS
        .iter()
        .filter_map(|p| {
            compile_or_skip(p.pattern).map(|re| (re, p.reference_group, p.content_group))
        })
        .collect()
});

/// Find specification sections in whole-document text.
///
/// All matches of the first pattern come before those of the second.
/// Content is cut to 500 characters.
pub fn find_spec_sections(text: &str) -> Vec<SpecSection> {
    let mut sections = Vec::new();

    for (re, reference_group, content_group) in COMPILED.iter() {
        let mut pos = 0;
        while let Some(caps) = re.captures_at(text, pos) {
            let (Some(reference), Some(content)) =
                (caps.get(*reference_group), caps.get(*content_group))
            else {
                break;
            };
            sections.push(SpecSection {
                reference: reference.as_str().to_string(),
                content: content.as_str().chars().take(MAX_CONTENT_CHARS).collect(),
            });
            // Content is never empty, so this always advances.
            pos = content.end();
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_with_title() {
        let sections = find_spec_sections("SECTION 23 0500 - COMMON WORK RESULTS\n\nEND");
        assert_eq!(sections[0].reference, "23 0500");
        assert_eq!(sections[0].content, "- COMMON WORK RESULTS");
    }

    #[test]
    fn test_consecutive_sections_split_at_keyword() {
        let sections =
            find_spec_sections("Section 23 0713: Duct insulation Section 23 0719: Pipe insulation");
        let first: Vec<&SpecSection> = sections
            .iter()
            .filter(|s| s.content.contains("insulation"))
            .collect();
        assert_eq!(first[0].reference, "23 0713");
        assert_eq!(first[0].content, "Duct insulation ");
        assert_eq!(first[1].reference, "23 0719");
        assert_eq!(first[1].content, "Pipe insulation");
    }

    #[test]
    fn test_masterformat_number_without_keyword() {
        let sections = find_spec_sections("22 1116 DOMESTIC WATER PIPING");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].reference, "DOMESTIC WATER PIPING");
        assert_eq!(sections[0].content, "DOMESTIC WATER PIPING");
    }

    #[test]
    fn test_content_truncated() {
        let long = "X".repeat(800);
        let sections = find_spec_sections(&format!("SECTION 26 0519 {long}"));
        assert_eq!(sections[0].content.chars().count(), 500);
    }

    #[test]
    fn test_no_sections() {
        assert!(find_spec_sections("AHU-1 3000 CFM").is_empty());
    }
}
