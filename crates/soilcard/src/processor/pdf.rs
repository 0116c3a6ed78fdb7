use std::path::Path;
use std::time::Instant;

use crate::error::ProcessError;
use crate::processor::{DocumentProcessor, ExtractionMethod, ExtractionResult, MediaType};

/// Reads embedded text from machine-generated PDFs.
pub struct PdfProcessor {
    confidence: f64,
}

impl PdfProcessor {
    pub fn new(confidence: f64) -> Self {
        Self { confidence }
    }
}

impl DocumentProcessor for PdfProcessor {
    fn extract(&mut self, path: &Path) -> Result<ExtractionResult, ProcessError> {
        let _span = tracing::info_span!("processor.pdf").entered();
        let started = Instant::now();

        let pdf_bytes = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc = lopdf::Document::load_mem(&pdf_bytes).map_err(|e| {
            ProcessError::Extraction(format!("Failed to load PDF '{}': {}", path.display(), e))
        })?;

        let text = extract_text_from_pdf(&doc);
        if text.trim().is_empty() {
            tracing::warn!(
                "{} has no embedded text; scanned cards should be uploaded as images",
                path.display()
            );
        }

        Ok(ExtractionResult {
            text,
            confidence: self.confidence,
            method: ExtractionMethod::PdfText,
            processing_time_ms: started.elapsed().as_millis() as u64,
        })
    }

    fn supports(&self, media_type: MediaType) -> bool {
        matches!(media_type, MediaType::Pdf)
    }
}

fn extract_text_from_pdf(doc: &lopdf::Document) -> String {
    let mut text = String::new();

    for (page_num, _) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => log::debug!("Skipping unreadable PDF page {}: {}", page_num, e),
        }
    }

    text
}
