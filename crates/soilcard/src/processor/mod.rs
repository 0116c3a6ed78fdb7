pub mod image;
pub mod ocr;
pub mod pdf;
pub mod preprocess;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProcessError;

pub use self::image::ImageProcessor;
#[cfg(feature = "ocr")]
pub use ocr::TesseractRecognizer;
pub use ocr::{Recognition, TextRecognizer};
pub use pdf::PdfProcessor;

/// Declared media types accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Jpeg,
    Jpg,
    Png,
    Pdf,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            "image/jpeg" => Some(MediaType::Jpeg),
            "image/jpg" => Some(MediaType::Jpg),
            "image/png" => Some(MediaType::Png),
            "application/pdf" => Some(MediaType::Pdf),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Jpg => "image/jpg",
            MediaType::Png => "image/png",
            MediaType::Pdf => "application/pdf",
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, MediaType::Pdf)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    /// Embedded text read straight from the PDF.
    PdfText,
    /// OCR on the preprocessed copy of the image.
    OcrPreprocessed,
    /// OCR on the uploaded image as-is.
    Ocr,
}

impl ExtractionMethod {
    pub fn is_ocr(&self) -> bool {
        !matches!(self, ExtractionMethod::PdfText)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    /// 0-100.
    pub confidence: f64,
    pub method: ExtractionMethod,
    pub processing_time_ms: u64,
}

pub trait DocumentProcessor {
    fn extract(&mut self, path: &Path) -> Result<ExtractionResult, ProcessError>;
    fn supports(&self, media_type: MediaType) -> bool;
}

/// Routes a document to the processor for its declared media type.
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn DocumentProcessor>>,
}

impl ProcessorRegistry {
    /// Without an image processor only PDFs can be handled.
    pub fn new(pdf_confidence: f64, image: Option<ImageProcessor>) -> Self {
        let mut processors: Vec<Box<dyn DocumentProcessor>> =
            vec![Box::new(PdfProcessor::new(pdf_confidence))];

        if let Some(image) = image {
            processors.push(Box::new(image));
        }

        Self { processors }
    }

    pub fn process(&mut self, path: &Path, mime: &str) -> Result<ExtractionResult, ProcessError> {
        let media_type = MediaType::from_mime(mime)
            .ok_or_else(|| ProcessError::UnsupportedType(mime.to_string()))?;

        for processor in &mut self.processors {
            if processor.supports(media_type) {
                return processor.extract(path);
            }
        }

        // An unreadable upload is an I/O error whichever processors are registered.
        std::fs::metadata(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        Err(ProcessError::Extraction(format!(
            "No text recognizer available for {}",
            media_type.as_mime()
        )))
    }
}
