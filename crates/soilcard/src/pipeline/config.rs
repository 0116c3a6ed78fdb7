use std::path::PathBuf;

use crate::config::Config;

pub struct PipelineConfig {
    pub ocr_enabled: bool,
    pub ocr_languages: Vec<String>,
    pub ocr_data_path: Option<String>,
    pub preprocess: bool,
    pub temp_directory: Option<PathBuf>,
    pub pattern_confidence: f64,
    pub pdf_confidence: f64,
    pub recommendations_enabled: bool,
    pub max_recommendations: usize,
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            ocr_enabled: config.ocr.enabled,
            ocr_languages: config.ocr.languages.clone(),
            ocr_data_path: config.ocr.data_path.clone(),
            preprocess: config.ocr.preprocess,
            temp_directory: config.ocr.temp_directory.as_ref().map(PathBuf::from),
            pattern_confidence: config.extraction.pattern_confidence,
            pdf_confidence: config.extraction.pdf_confidence,
            recommendations_enabled: config.recommendations.enabled,
            max_recommendations: config.recommendations.max_results,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
