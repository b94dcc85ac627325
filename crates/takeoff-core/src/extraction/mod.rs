pub mod pdftotext;
pub mod plain_text;
pub mod table;

use crate::error::TakeoffError;
use crate::model::DocumentMetadata;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Linearized text of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number.
    pub page: usize,
    pub text: String,
    /// Length of `text` in characters.
    pub text_length: usize,
}

impl PageText {
    pub fn new(page: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        PageText {
            page,
            text_length: text.chars().count(),
            text,
        }
    }
}

/// A decoded document: metadata, change-detection hash and pages in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedDocument {
    pub metadata: DocumentMetadata,
    pub text_hash: String,
    pub pages: Vec<PageText>,
}

impl DecodedDocument {
    /// Build a document from page texts in order, numbering pages from 1.
    ///
    /// `metadata.page_count` is filled from the page list when it is zero.
    pub fn from_pages(mut metadata: DocumentMetadata, texts: Vec<String>) -> Self {
        let pages: Vec<PageText> = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageText::new(i + 1, text))
            .collect();
        if metadata.page_count == 0 {
            metadata.page_count = pages.len();
        }
        DecodedDocument {
            metadata,
            text_hash: content_hash(&pages),
            pages,
        }
    }

    /// All page texts joined by newlines, in page order.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Hex SHA-256 over the newline-joined page texts.
pub fn content_hash(pages: &[PageText]) -> String {
    let mut hasher = Sha256::new();
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            hasher.update(b"\n");
        }
        hasher.update(page.text.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Split text on form feeds into pages. A trailing empty segment (text
/// ending in a form feed) is not a page.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\x0c').map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Trait for document decoding backends.
pub trait PdfExtractor: Send + Sync {
    /// Decode document bytes into pages and metadata.
    fn decode(&self, pdf_bytes: &[u8]) -> Result<DecodedDocument, TakeoffError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
