use serde::{Deserialize, Serialize};

/// Confidence recorded for a value captured by a pattern rule.
pub const DEFAULT_PATTERN_CONFIDENCE: f64 = 85.0;

/// Confidence recorded for text pulled straight out of a PDF.
pub const DEFAULT_PDF_CONFIDENCE: f64 = 95.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            ocr: OcrConfig::default(),
            extraction: ExtractionConfig::default(),
            recommendations: RecommendationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Greyscale/normalize/sharpen images before recognition.
    #[serde(default = "default_true")]
    pub preprocess: bool,
    /// Tesseract data directory; `None` uses the library default.
    #[serde(default)]
    pub data_path: Option<String>,
    /// Where preprocessed images are written; `None` uses the system temp dir.
    #[serde(default)]
    pub temp_directory: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_languages() -> Vec<String> {
    vec!["eng".to_string()]
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            languages: default_languages(),
            preprocess: true,
            data_path: None,
            temp_directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_pattern_confidence")]
    pub pattern_confidence: f64,
    #[serde(default = "default_pdf_confidence")]
    pub pdf_confidence: f64,
}

fn default_pattern_confidence() -> f64 {
    DEFAULT_PATTERN_CONFIDENCE
}

fn default_pdf_confidence() -> f64 {
    DEFAULT_PDF_CONFIDENCE
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pattern_confidence: DEFAULT_PATTERN_CONFIDENCE,
            pdf_confidence: DEFAULT_PDF_CONFIDENCE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    5
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_results: default_max_results(),
        }
    }
}
