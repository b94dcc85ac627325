pub mod sections;
pub mod version;

use crate::extraction::table::TableDetector;
use crate::extraction::DecodedDocument;
use crate::lexicon::equipment::EquipmentLexicon;
use crate::model::{DocumentReport, DocumentStats, EquipmentMention};
use crate::scan::extract_equipment_with;
use crate::ExtractOptions;
use sections::find_spec_sections;
use std::collections::{BTreeMap, HashSet};
use version::find_version_info;

/// Build the report for a decoded document.
///
/// Pages are scanned in order; spec sections and version info are searched
/// once over the newline-joined text of all pages. A failing table detector
/// only drops the table fields.
pub fn build_report(
    doc: &DecodedDocument,
    options: &ExtractOptions,
    tables: Option<&dyn TableDetector>,
) -> DocumentReport {
    let lexicon = EquipmentLexicon::builtin();
    let equipment: Vec<EquipmentMention> = doc
        .pages
        .iter()
        .flat_map(|page| extract_equipment_with(lexicon, &page.text, page.page, options))
        .collect();

    let (has_tables, table_count) = match tables.map(|t| t.count_tables(&doc.pages)) {
        Some(Ok(count)) => (Some(count > 0), Some(count)),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "table detection failed, continuing without tables");
            (None, None)
        }
        None => (None, None),
    };

    let full_text = doc.full_text();
    let spec_sections = find_spec_sections(&full_text);
    let version_info = find_version_info(&full_text);
    let stats = compute_stats(doc.metadata.page_count, &equipment);

    tracing::debug!(
        pages = stats.pages,
        equipment = stats.equipment_count,
        sections = spec_sections.len(),
        "built document report"
    );

    DocumentReport {
        metadata: doc.metadata.clone(),
        text_hash: doc.text_hash.clone(),
        equipment,
        spec_sections,
        version_info,
        stats,
        has_tables,
        table_count,
    }
}

/// Document totals. `unique_tags` counts distinct tags across all pages, so
/// a tag repeated on two pages counts once.
pub fn compute_stats(pages: usize, equipment: &[EquipmentMention]) -> DocumentStats {
    let unique_tags = equipment
        .iter()
        .map(|e| e.tag.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut by_category = BTreeMap::new();
    for e in equipment {
        *by_category.entry(e.category).or_insert(0) += 1;
    }

    DocumentStats {
        pages,
        equipment_count: equipment.len(),
        unique_tags,
        by_category,
    }
}
