//! Per-file driver: turns paths into success/failure outcomes.
//!
//! Every failure here is data. One unreadable or corrupt file produces a
//! `success: false` entry and the rest of the batch carries on.

use crate::error::TakeoffError;
use crate::extraction::plain_text::PlainTextExtractor;
use crate::extraction::PdfExtractor;
use crate::model::DocumentReport;
use crate::{process_pdf, ExtractOptions};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A document report tagged with the file it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file_path: String,
    pub file_name: String,
    /// RFC 3339 timestamp.
    pub processed_at: String,
    #[serde(flatten)]
    pub report: DocumentReport,
}

/// Result for one input path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FileReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentOutcome {
    pub fn ok(report: FileReport) -> Self {
        DocumentOutcome {
            success: true,
            data: Some(report),
            error: None,
        }
    }

    pub fn failed(error: &TakeoffError) -> Self {
        DocumentOutcome {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

/// Batch-level settings.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub extract: ExtractOptions,
    /// Worker threads; 0 or 1 processes files sequentially.
    pub jobs: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            extract: ExtractOptions::default(),
            jobs: 1,
        }
    }
}

static PLAIN_TEXT: PlainTextExtractor = PlainTextExtractor;

/// Pick the decoder for a path: `.txt` dumps are read as text, everything
/// else goes to the PDF backend.
pub fn extractor_for<'a>(path: &Path, pdf: &'a dyn PdfExtractor) -> &'a dyn PdfExtractor {
    let is_text = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if is_text {
        &PLAIN_TEXT
    } else {
        pdf
    }
}

/// Process one file. Never fails: errors become a `success: false` outcome.
pub fn process_path(
    path: &Path,
    pdf: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> DocumentOutcome {
    match try_process_path(path, pdf, options) {
        Ok(report) => {
            tracing::info!(
                file = %path.display(),
                equipment = report.report.stats.equipment_count,
                "processed"
            );
            DocumentOutcome::ok(report)
        }
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "document failed");
            DocumentOutcome::failed(&e)
        }
    }
}

fn try_process_path(
    path: &Path,
    pdf: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<FileReport, TakeoffError> {
    if !path.is_file() {
        return Err(TakeoffError::FileNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    let extractor = extractor_for(path, pdf);
    tracing::debug!(file = %path.display(), backend = extractor.backend_name(), "decoding");
    let report = process_pdf(&bytes, extractor, options)?;

    Ok(FileReport {
        file_path: path.display().to_string(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        processed_at: chrono::Utc::now().to_rfc3339(),
        report,
    })
}

/// Process every path, returning outcomes in input order.
///
/// Documents are independent, so with `jobs > 1` they run on a rayon pool.
pub fn process_paths(
    paths: &[PathBuf],
    pdf: &dyn PdfExtractor,
    options: &BatchOptions,
) -> Vec<DocumentOutcome> {
    let run_sequential = || -> Vec<DocumentOutcome> {
        paths
            .iter()
            .map(|p| process_path(p, pdf, &options.extract))
            .collect()
    };

    if options.jobs <= 1 || paths.len() <= 1 {
        return run_sequential();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(options.jobs).build() {
        Ok(pool) => pool.install(|| {
            paths
                .par_iter()
                .map(|p| process_path(p, pdf, &options.extract))
                .collect()
        }),
        Err(e) => {
            tracing::warn!(error = %e, "could not start worker pool, processing sequentially");
            run_sequential()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_outcome() {
        let path = PathBuf::from("/definitely/not/here.pdf");
        let outcome = process_path(&path, &PLAIN_TEXT, &ExtractOptions::default());
        assert!(!outcome.success);
        assert!(outcome.data.is_none());
        assert_eq!(
            outcome.error.as_deref(),
            Some("File not found: /definitely/not/here.pdf")
        );
    }

    #[test]
    fn test_text_file_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "m101.txt", b"AHU-1 3000 CFM\x0cRTU-2 10 TONS");
        let outcome = process_path(&path, &PLAIN_TEXT, &ExtractOptions::default());
        assert!(outcome.success);
        let data = outcome.data.unwrap();
        assert_eq!(data.file_name, "m101.txt");
        assert_eq!(data.report.stats.pages, 2);
        assert_eq!(data.report.equipment.len(), 2);
    }

    #[test]
    fn test_failed_outcome_serializes_without_data() {
        let outcome =
            DocumentOutcome::failed(&TakeoffError::Extraction("corrupt xref".into()));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "PDF extraction failed: corrupt xref");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_batch_keeps_order_and_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_temp(&dir, "a.txt", b"EF-1 800 CFM");
        let missing = dir.path().join("missing.txt");
        let b = write_temp(&dir, "b.txt", b"P-1 150 GPM");
        let paths = vec![a, missing, b];

        let options = BatchOptions {
            jobs: 3,
            ..BatchOptions::default()
        };
        let outcomes = process_paths(&paths, &PLAIN_TEXT, &options);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert!(outcomes[2].success);
        assert_eq!(outcomes[2].data.as_ref().unwrap().file_name, "b.txt");
    }

    #[test]
    fn test_batch_survives_non_breaking_space_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_temp(
            &dir,
            "a.txt",
            "AHU-1\u{a0}\u{a0}3000 CFM\u{a0}\u{a0}5 HP".as_bytes(),
        );
        let b = write_temp(&dir, "b.txt", b"EF-1 800 CFM");

        let outcomes = process_paths(&[a, b], &PLAIN_TEXT, &BatchOptions::default());
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.success));
        assert_eq!(outcomes[0].data.as_ref().unwrap().report.table_count, Some(0));
    }

    #[test]
    fn test_extractor_for_dispatches_on_extension() {
        struct Pdf;
        impl PdfExtractor for Pdf {
            fn decode(
                &self,
                _bytes: &[u8],
            ) -> Result<crate::extraction::DecodedDocument, TakeoffError> {
                Err(TakeoffError::Extraction("not used".into()))
            }
            fn backend_name(&self) -> &str {
                "pdf"
            }
        }
        assert_eq!(
            extractor_for(Path::new("x.TXT"), &Pdf).backend_name(),
            "plain-text"
        );
        assert_eq!(extractor_for(Path::new("x.pdf"), &Pdf).backend_name(), "pdf");
    }
}
