use crate::error::TakeoffError;
use crate::extraction::{split_pages, DecodedDocument, PdfExtractor};
use crate::model::DocumentMetadata;

/// Backend for text dumps that were already extracted from a drawing set.
///
/// Input must be UTF-8; pages are separated by form feeds, the same
/// convention `pdftotext` uses.
pub struct PlainTextExtractor;

impl PdfExtractor for PlainTextExtractor {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedDocument, TakeoffError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| TakeoffError::Extraction(format!("input is not UTF-8 text: {e}")))?;
        Ok(DecodedDocument::from_pages(
            DocumentMetadata::default(),
            split_pages(text),
        ))
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pages() {
        let doc = PlainTextExtractor
            .decode(b"AHU-1 3000 CFM\x0cRTU-2 10 TONS\x0c")
            .unwrap();
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.metadata.page_count, 2);
        assert_eq!(doc.pages[1].text, "RTU-2 10 TONS");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = PlainTextExtractor.decode(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, TakeoffError::Extraction(_)));
    }
}
