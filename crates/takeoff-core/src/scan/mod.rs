pub mod confidence;
pub mod context;

use crate::lexicon::equipment::EquipmentLexicon;
use crate::lexicon::size::SizeLexicon;
use crate::lexicon::spec_ref::find_spec_references;
use crate::model::EquipmentMention;
use crate::ExtractOptions;
use confidence::score_confidence;
use context::context_window;
use std::collections::HashSet;

/// Replace line breaks with spaces. Each `\r` and `\n` becomes exactly one
/// space so character offsets are unchanged.
pub fn normalize_page_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Extract equipment mentions from one page using the built-in lexicons and
/// default context window.
pub fn extract_equipment(page_text: &str, page_number: usize) -> Vec<EquipmentMention> {
    extract_equipment_with(
        EquipmentLexicon::builtin(),
        page_text,
        page_number,
        &ExtractOptions::default(),
    )
}

/// Extract equipment mentions from one page.
///
/// Categories are scanned in lexicon order, each category's patterns in
/// declared order. The first mention of a tag on the page wins; later
/// mentions with the same tag text are dropped regardless of category or
/// context. Output order is the order in which mentions were accepted.
pub fn extract_equipment_with(
    lexicon: &EquipmentLexicon,
    page_text: &str,
    page_number: usize,
    options: &ExtractOptions,
) -> Vec<EquipmentMention> {
    let text = normalize_page_text(page_text);
    let sizes_lexicon = SizeLexicon::builtin();
    let mut seen_tags: HashSet<String> = HashSet::new();
    let mut mentions = Vec::new();

    for category in lexicon.categories() {
        for pattern in &category.patterns {
            for caps in pattern.captures_iter(&text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                let suffix = caps.get(1).map_or("", |m| m.as_str());
                let tag = compose_tag(whole.as_str(), suffix);

                if !seen_tags.insert(tag.clone()) {
                    continue;
                }

                let context = context_window(
                    &text,
                    whole.start(),
                    whole.end(),
                    options.context_before,
                    options.context_after,
                );
                let sizes = sizes_lexicon.extract(context);
                let specs_references = dedupe(find_spec_references(context));
                let confidence = score_confidence(context, &tag, &sizes);

                mentions.push(EquipmentMention {
                    tag,
                    equipment_type: category.label.to_string(),
                    category: category.category,
                    sizes,
                    specs_references,
                    raw_text: context.trim().to_string(),
                    confidence,
                    page_number,
                });
            }
        }
    }

    tracing::debug!(page = page_number, mentions = mentions.len(), "scanned page");
    mentions
}

/// Build a tag from a match: the text before the first occurrence of the
/// captured number, trimmed, followed by the number.
fn compose_tag(whole: &str, suffix: &str) -> String {
    let suffix = suffix.trim();
    if suffix.is_empty() {
        return whole.trim().to_string();
    }
    let prefix = whole.find(suffix).map_or(whole, |i| &whole[..i]);
    format!("{}{}", prefix.trim(), suffix)
}

/// Drop repeated references, keeping first-seen order.
fn dedupe(refs: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    refs.into_iter().filter(|r| seen.insert(r.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::equipment::CategoryDef;
    use crate::model::{EquipmentCategory, SizeKind};
    use rust_decimal_macros::dec;

    #[test]
    fn test_normalize_keeps_length() {
        let text = "AHU-1\r\nSUPPLY\nFAN";
        let norm = normalize_page_text(text);
        assert_eq!(norm, "AHU-1  SUPPLY FAN");
        assert_eq!(norm.len(), text.len());
    }

    #[test]
    fn test_compose_tag() {
        assert_eq!(compose_tag("AHU-1", "1"), "AHU-1");
        assert_eq!(compose_tag("AHU 12", "12"), "AHU12");
        assert_eq!(compose_tag("ROOFTOP UNIT-3A", "3A"), "ROOFTOP UNIT-3A");
        assert_eq!(compose_tag(" TANK ", ""), "TANK");
    }

    #[test]
    fn test_reference_example() {
        let mentions = extract_equipment("AHU-1 3000 CFM see Section 23 0500", 1);
        assert_eq!(mentions.len(), 1);
        let m = &mentions[0];
        assert_eq!(m.tag, "AHU-1");
        assert_eq!(m.category, EquipmentCategory::Ahu);
        assert_eq!(m.equipment_type, "Air Handling Unit");
        assert!(m
            .sizes
            .iter()
            .any(|s| s.kind == SizeKind::FlowCfm && s.value == "3000 CFM"));
        assert!(m.specs_references.contains(&"23 0500".to_string()));
        assert!(m.confidence >= dec!(0.8));
        assert_eq!(m.page_number, 1);
    }

    #[test]
    fn test_duplicate_tag_keeps_first_occurrence() {
        let text = "RTU-2 ON ROOF. NOTES: RTU-2 12 TONS SEE SHEET M501";
        let mentions = extract_equipment(text, 3);
        let rtu: Vec<_> = mentions.iter().filter(|m| m.tag == "RTU-2").collect();
        assert_eq!(rtu.len(), 1);
        assert!(rtu[0].raw_text.starts_with("RTU-2 ON ROOF"));
    }

    #[test]
    fn test_earlier_category_wins_shared_tag() {
        // "HX-1" is listed under both AHU components and heat exchangers.
        let mentions = extract_equipment("HX-1 PLATE", 1);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].category, EquipmentCategory::AhuComponents);
    }

    #[test]
    fn test_no_equipment() {
        assert!(extract_equipment("GENERAL NOTES: COORDINATE WITH ARCHITECT.", 1).is_empty());
        assert!(extract_equipment("", 1).is_empty());
    }

    #[test]
    fn test_line_breaks_do_not_block_matches() {
        let mentions = extract_equipment("SCHEDULE\nEF-3\n1200 CFM", 2);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].tag, "EF-3");
        assert_eq!(mentions[0].raw_text, "SCHEDULE EF-3 1200 CFM");
    }

    #[test]
    fn test_tag_case_is_preserved() {
        let mentions = extract_equipment("vav-12 serves room 101", 1);
        assert_eq!(mentions[0].tag, "vav-12");
    }

    #[test]
    fn test_context_window_is_bounded() {
        let filler = "x".repeat(300);
        let text = format!("{filler} AHU-7 {filler}");
        let mentions = extract_equipment(&text, 1);
        assert_eq!(mentions.len(), 1);
        // 50 before + "AHU-7" + 150 after
        assert_eq!(mentions[0].raw_text.chars().count(), 50 + 5 + 150);
        assert!(mentions[0].raw_text.contains(" AHU-7 "));
    }

    #[test]
    fn test_custom_window_options() {
        let options = ExtractOptions {
            context_before: 0,
            context_after: 0,
            ..ExtractOptions::default()
        };
        let mentions = extract_equipment_with(
            EquipmentLexicon::builtin(),
            "PUMP-1 150 GPM",
            1,
            &options,
        );
        assert_eq!(mentions[0].raw_text, "PUMP-1");
        assert!(mentions[0].sizes.is_empty());
    }

    #[test]
    fn test_malformed_pattern_skipped() {
        let table = [
            CategoryDef {
                category: EquipmentCategory::Ahu,
                label: "Air Handling Unit",
                patterns: &[r"\bAHU[- ]?(\d+", r"\bMAU[- ]?(\d+[A-Z]?)\b"],
                size_indicators: &[],
            },
            CategoryDef {
                category: EquipmentCategory::Fan,
                label: "Fan",
                patterns: &[r"\bEF-(\d+)\b"],
                size_indicators: &[],
            },
        ];
        let lexicon = EquipmentLexicon::compile(&table);
        let mentions =
            extract_equipment_with(&lexicon, "AHU-1 MAU-2 EF-3", 1, &ExtractOptions::default());
        let tags: Vec<&str> = mentions.iter().map(|m| m.tag.as_str()).collect();
        assert_eq!(tags, vec!["MAU-2", "EF-3"]);
    }

    #[test]
    fn test_spec_references_deduped() {
        let mentions = extract_equipment("BOILER-1 SEE SHEET M501 SEE SHEET M501", 1);
        let boiler = mentions.iter().find(|m| m.tag == "BOILER-1").unwrap();
        assert_eq!(boiler.specs_references, vec!["M501".to_string()]);
    }
}
