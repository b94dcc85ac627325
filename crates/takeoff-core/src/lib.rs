pub mod batch;
pub mod document;
pub mod error;
pub mod extraction;
pub mod lexicon;
pub mod model;
pub mod scan;

use error::TakeoffError;
use extraction::table::{LayoutTableDetector, TableDetector};
use extraction::{DecodedDocument, PdfExtractor};
use model::DocumentReport;

pub use scan::extract_equipment;

/// Options controlling how documents are scanned.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Characters of context kept before a tag match.
    pub context_before: usize,
    /// Characters of context kept after a tag match.
    pub context_after: usize,
    /// Annotate reports with `has_tables` / `table_count`.
    pub detect_tables: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            context_before: 50,
            context_after: 150,
            detect_tables: true,
        }
    }
}

/// Main API entry point: decode a PDF and extract its equipment report.
///
/// A decode failure is returned as an error before any extraction runs.
pub fn process_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<DocumentReport, TakeoffError> {
    let decoded = extractor.decode(pdf_bytes)?;
    Ok(process_document(&decoded, options))
}

/// Extract the report for an already decoded document.
pub fn process_document(doc: &DecodedDocument, options: &ExtractOptions) -> DocumentReport {
    let detector = LayoutTableDetector::default();
    let tables: Option<&dyn TableDetector> = if options.detect_tables {
        Some(&detector)
    } else {
        None
    };
    document::build_report(doc, options, tables)
}
