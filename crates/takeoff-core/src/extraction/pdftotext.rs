use crate::error::TakeoffError;
use crate::extraction::{split_pages, DecodedDocument, PdfExtractor};
use crate::model::DocumentMetadata;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

/// PDF extraction backend using poppler-utils.
///
/// Page text comes from `pdftotext -layout` (pages separated by form feeds),
/// metadata from `pdfinfo`.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn decode(&self, pdf_bytes: &[u8]) -> Result<DecodedDocument, TakeoffError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| TakeoffError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| TakeoffError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        let output = run_tool("pdftotext", &["-layout"], &tmp_path, true)?;
        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);

        // Metadata is best effort.
        let metadata = match run_tool("pdfinfo", &[], &tmp_path, false) {
            Ok(info) => parse_pdfinfo(&String::from_utf8_lossy(&info.stdout)),
            Err(e) => {
                tracing::warn!(error = %e, "pdfinfo failed, metadata left empty");
                DocumentMetadata::default()
            }
        };

        Ok(DecodedDocument::from_pages(metadata, pages))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn run_tool(
    tool: &'static str,
    args: &[&str],
    pdf_path: &Path,
    to_stdout: bool,
) -> Result<Output, TakeoffError> {
    let mut cmd = Command::new(tool);
    cmd.args(args).arg(pdf_path);
    if to_stdout {
        cmd.arg("-");
    }
    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TakeoffError::PdftotextNotFound
        } else {
            TakeoffError::Extraction(format!("{tool} failed: {e}"))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(TakeoffError::PdftotextFailed { tool, code, stderr });
    }

    Ok(output)
}

/// Parse `pdfinfo` output ("Key:   value" lines).
fn parse_pdfinfo(info: &str) -> DocumentMetadata {
    let mut metadata = DocumentMetadata::default();

    for line in info.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "Title" => metadata.title = value.to_string(),
            "Author" => metadata.author = value.to_string(),
            "CreationDate" => metadata.created = value.to_string(),
            "Pages" => metadata.page_count = value.parse().unwrap_or(0),
            _ => {}
        }
    }

    metadata
}
