//! Ordered pattern tables driving the extraction engine.
//!
//! Tables are plain `const` data so their order (which decides which of two
//! duplicate tags survives on a page) is visible in one place. Each table is
//! compiled once into a process-wide static; patterns that fail to compile
//! are logged and skipped instead of poisoning the whole lexicon.

pub mod equipment;
pub mod size;
pub mod spec_ref;

use crate::error::TakeoffError;
use regex::{Captures, Regex, RegexBuilder};

/// Compile a lexicon pattern. All lexicon matching is case-insensitive.
pub fn compile(pattern: &str) -> Result<Regex, TakeoffError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| TakeoffError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// Compile a pattern, logging and dropping it on failure.
pub(crate) fn compile_or_skip(pattern: &str) -> Option<Regex> {
    match compile(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, "skipping malformed lexicon pattern");
            None
        }
    }
}

/// First non-empty capture group, or the whole match if the pattern has no
/// participating group.
pub(crate) fn first_capture<'h>(caps: &Captures<'h>) -> &'h str {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| caps.get(0).map_or("", |m| m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_is_case_insensitive() {
        let re = compile(r"\bAHU-(\d+)").unwrap();
        assert!(re.is_match("ahu-1"));
    }

    #[test]
    fn test_compile_reports_bad_pattern() {
        let err = compile(r"(\d+").unwrap_err();
        assert!(matches!(err, TakeoffError::InvalidPattern { .. }));
        assert!(compile_or_skip(r"(\d+").is_none());
    }

    #[test]
    fn test_first_capture_picks_first_non_empty_alternative() {
        let re = compile(r"(\d{3}/\d{3})|(\d{3}V)").unwrap();
        let caps = re.captures("rated 208V").unwrap();
        assert_eq!(first_capture(&caps), "208V");
    }

    #[test]
    fn test_first_capture_falls_back_to_whole_match() {
        let re = compile(r"AHU-\d+").unwrap();
        let caps = re.captures("AHU-4").unwrap();
        assert_eq!(first_capture(&caps), "AHU-4");
    }
}
