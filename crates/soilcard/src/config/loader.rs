use std::path::Path;

use crate::config::schema::Config;
use crate::error::ConfigError;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != "1.0" {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if config.ocr.languages.is_empty() {
        return Err(ConfigError::Validation {
            message: "ocr.languages must name at least one language".to_string(),
        });
    }

    for lang in &config.ocr.languages {
        if !is_tesseract_language(lang) {
            return Err(ConfigError::Validation {
                message: format!("Invalid OCR language code: '{}'", lang),
            });
        }
    }

    validate_confidence("extraction.pattern_confidence", config.extraction.pattern_confidence)?;
    validate_confidence("extraction.pdf_confidence", config.extraction.pdf_confidence)?;

    if config.recommendations.max_results == 0 {
        return Err(ConfigError::Validation {
            message: "recommendations.max_results must be at least 1".to_string(),
        });
    }

    Ok(())
}

fn validate_confidence(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::Validation {
            message: format!("{} must be within 0-100, got {}", field, value),
        });
    }
    Ok(())
}

/// Tesseract traineddata names: `eng`, `deu`, `chi_sim`, ...
fn is_tesseract_language(code: &str) -> bool {
    code.len() >= 3 && code.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}
