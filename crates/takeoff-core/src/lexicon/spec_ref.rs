use crate::lexicon::compile_or_skip;
use regex::Regex;
use std::sync::LazyLock;

/// Patterns recognizing pointers to specification sections and sheets.
pub const SPEC_REFERENCE_PATTERNS: &[&str] = &[
    // "SECTION 23 0500", "DIV 23 05 00"
    r"(?:section|sect|div)\s*[\d\s,\-–]+\s*[–-]?\s*(\d{2}\s*\d{2}\s*\d{2,4})",
    // "SEE SHEET M501", "REFER TO SHEET 4/501"
    r"(?:see|refer\s*to|shown\s*on|detail)\s*(?:page|sheet|section|dwg|dwg\.|draw\.|fig\.|figure)\s*[:.]?\s*([A-Z]?\d+(?:[-/]\d+)?)",
];

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SPEC_REFERENCE_PATTERNS
        .iter()
        .filter_map(|p| compile_or_skip(p))
        .collect()
});

/// All non-empty captured references in `context`, in pattern order.
/// May contain duplicates; callers dedupe.
pub fn find_spec_references(context: &str) -> Vec<String> {
    let mut refs = Vec::new();
    for re in COMPILED.iter() {
        for caps in re.captures_iter(context) {
            refs.extend(
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
        }
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_number_and_see_section() {
        let refs = find_spec_references("AHU-1 3000 CFM see Section 23 0500");
        assert!(refs.contains(&"23 0500".to_string()));
        assert!(refs.contains(&"23".to_string()));
    }

    #[test]
    fn test_see_sheet() {
        let refs = find_spec_references("EF-2 SEE SHEET M501 FOR MOUNTING");
        assert_eq!(refs, vec!["M501".to_string()]);
    }

    #[test]
    fn test_refer_to_sheet_with_slash() {
        let refs = find_spec_references("REFER TO SHEET 4/501");
        assert_eq!(refs, vec!["4/501".to_string()]);
    }

    #[test]
    fn test_no_references() {
        assert!(find_spec_references("RTU-1 ON ROOF").is_empty());
    }
}
