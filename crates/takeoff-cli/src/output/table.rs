use takeoff_core::model::DocumentReport;

pub fn print(report: &DocumentReport) {
    print!("{}", format_report(report));
}

/// Human-readable summary of one document.
pub fn format_report(report: &DocumentReport) -> String {
    let mut out = String::new();

    if !report.metadata.title.is_empty() {
        out.push_str(&format!("{}\n", report.metadata.title));
    }
    let info = &report.version_info;
    if let Some(ref project) = info.project_name {
        out.push_str(&format!("Project:  {project}\n"));
    }
    if let Some(ref date) = info.drawing_date {
        out.push_str(&format!("Date:     {date}\n"));
    }
    if let Some(ref rev) = info.revision {
        out.push_str(&format!("Revision: {rev}\n"));
    }
    out.push_str(&format!(
        "Pages: {}  Equipment: {}  Unique tags: {}\n\n",
        report.stats.pages, report.stats.equipment_count, report.stats.unique_tags
    ));

    if report.equipment.is_empty() {
        out.push_str("No equipment found.\n");
    } else {
        let tag_width = report
            .equipment
            .iter()
            .map(|e| e.tag.len())
            .max()
            .unwrap_or(3)
            .max(3);
        let type_width = report
            .equipment
            .iter()
            .map(|e| e.equipment_type.len())
            .max()
            .unwrap_or(4)
            .max(4);

        out.push_str(&format!(
            "  {:<tag_width$}  {:<type_width$}  {:>4}  {:>5}  SIZES\n",
            "TAG", "TYPE", "PAGE", "CONF"
        ));
        for e in &report.equipment {
            let sizes = e
                .sizes
                .iter()
                .map(|s| format!("{}={}", s.kind, s.value))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "  {:<tag_width$}  {:<type_width$}  {:>4}  {:>5}  {}\n",
                e.tag, e.equipment_type, e.page_number, e.confidence, sizes
            ));
        }
    }

    if !report.stats.by_category.is_empty() {
        out.push_str("\nBy category:\n");
        for (category, count) in &report.stats.by_category {
            out.push_str(&format!("  {:<18} {}\n", category, count));
        }
    }

    if !report.spec_sections.is_empty() {
        out.push_str("\nSpec sections:\n");
        for s in &report.spec_sections {
            let title: String = s.content.chars().take(60).collect();
            out.push_str(&format!("  {:<12} {}\n", s.reference, title.trim()));
        }
    }

    if let Some(count) = report.table_count {
        out.push_str(&format!("\nTables detected: {count}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use takeoff_core::extraction::DecodedDocument;
    use takeoff_core::model::DocumentMetadata;
    use takeoff_core::{process_document, ExtractOptions};

    #[test]
    fn test_format_report() {
        let doc = DecodedDocument::from_pages(
            DocumentMetadata::default(),
            vec!["PROJECT: CLINIC\nAHU-1 3000 CFM".to_string()],
        );
        let report = process_document(&doc, &ExtractOptions::default());
        let text = format_report(&report);
        assert!(text.contains("Project:  CLINIC"));
        assert!(text.contains("AHU-1"));
        assert!(text.contains("cfm=3000 CFM"));
        assert!(text.contains("Tables detected: 0"));
    }

    #[test]
    fn test_format_empty_report() {
        let doc = DecodedDocument::from_pages(DocumentMetadata::default(), vec![String::new()]);
        let report = process_document(&doc, &ExtractOptions::default());
        assert!(format_report(&report).contains("No equipment found."));
    }
}
