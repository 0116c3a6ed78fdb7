use std::path::Path;

use crate::error::ProcessError;

/// Raw output of a recognition engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub text: String,
    /// Engine-reported, 0-100.
    pub confidence: f64,
}

/// An OCR engine. Takes `&mut self`: an engine instance serves one caller at a time.
pub trait TextRecognizer {
    fn recognize(&mut self, image_path: &Path) -> Result<Recognition, ProcessError>;
}

/// Tesseract via leptess. The native handle is created on first use and
/// reused for every later image.
#[cfg(feature = "ocr")]
pub struct TesseractRecognizer {
    languages: String,
    data_path: Option<String>,
    engine: Option<leptess::LepTess>,
}

#[cfg(feature = "ocr")]
impl TesseractRecognizer {
    pub fn new(languages: &[String], data_path: Option<String>) -> Self {
        let languages = if languages.is_empty() {
            "eng".to_string()
        } else {
            languages.join("+")
        };

        Self {
            languages,
            data_path,
            engine: None,
        }
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    fn engine(&mut self) -> Result<&mut leptess::LepTess, ProcessError> {
        if self.engine.is_none() {
            let lt = leptess::LepTess::new(self.data_path.as_deref(), &self.languages).map_err(
                |e| ProcessError::Extraction(format!("Failed to initialize Tesseract: {}", e)),
            )?;
            log::info!("Tesseract initialized (languages: {})", self.languages);
            self.engine = Some(lt);
        }

        self.engine
            .as_mut()
            .ok_or_else(|| ProcessError::Extraction("Tesseract engine unavailable".to_string()))
    }
}

#[cfg(feature = "ocr")]
impl TextRecognizer for TesseractRecognizer {
    fn recognize(&mut self, image_path: &Path) -> Result<Recognition, ProcessError> {
        let _span = tracing::info_span!("processor.ocr").entered();

        let image_data = std::fs::read(image_path).map_err(|e| ProcessError::ReadDocument {
            path: image_path.to_path_buf(),
            source: e,
        })?;

        let engine = self.engine()?;

        engine
            .set_image_from_mem(&image_data)
            .map_err(|e| ProcessError::Extraction(format!("Failed to set image for OCR: {}", e)))?;

        let text = engine
            .get_utf8_text()
            .map_err(|e| ProcessError::Extraction(format!("OCR failed: {}", e)))?;

        let confidence = f64::from(engine.mean_image_conf().clamp(0, 100));

        Ok(Recognition { text, confidence })
    }
}
