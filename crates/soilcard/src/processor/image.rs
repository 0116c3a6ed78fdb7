use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::ProcessError;
use crate::processor::ocr::TextRecognizer;
use crate::processor::preprocess::preprocess_to_temp;
use crate::processor::{DocumentProcessor, ExtractionMethod, ExtractionResult, MediaType};

/// OCR path for JPEG/PNG uploads.
pub struct ImageProcessor {
    recognizer: Box<dyn TextRecognizer>,
    preprocess: bool,
    temp_dir: Option<PathBuf>,
}

impl ImageProcessor {
    pub fn new(
        recognizer: Box<dyn TextRecognizer>,
        preprocess: bool,
        temp_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            recognizer,
            preprocess,
            temp_dir,
        }
    }
}

impl DocumentProcessor for ImageProcessor {
    fn extract(&mut self, path: &Path) -> Result<ExtractionResult, ProcessError> {
        let _span = tracing::info_span!("processor.image").entered();
        let started = Instant::now();

        let image_data = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Held until recognition returns; dropping it deletes the file on every path.
        let prepared = if self.preprocess {
            match preprocess_to_temp(&image_data, self.temp_dir.as_deref()) {
                Ok(temp) => Some(temp),
                Err(e) => {
                    tracing::warn!(
                        "Preprocessing {} failed: {}. Running OCR on the original.",
                        path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        };

        let (target, method) = match &prepared {
            Some(temp) => (temp.path(), ExtractionMethod::OcrPreprocessed),
            None => (path, ExtractionMethod::Ocr),
        };

        let recognition = self
            .recognizer
            .recognize(target)
            .map_err(|e| match e {
                ProcessError::Extraction(msg) => ProcessError::Extraction(format!(
                    "OCR failed for '{}': {}",
                    path.display(),
                    msg
                )),
                other => other,
            })?;

        drop(prepared);

        Ok(ExtractionResult {
            text: recognition.text,
            confidence: recognition.confidence.clamp(0.0, 100.0),
            method,
            processing_time_ms: started.elapsed().as_millis() as u64,
        })
    }

    fn supports(&self, media_type: MediaType) -> bool {
        media_type.is_image()
    }
}
