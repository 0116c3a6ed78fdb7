use crate::analysis::SoilDataSet;
use crate::processor::ExtractionResult;
use crate::recommend::{CropRecommendation, SoilAdvice};

use super::error::PipelineWarning;

#[derive(Default)]
pub struct PipelineContext {
    // Step 1 result; None when the caller supplied text directly
    pub extraction: Option<ExtractionResult>,

    // Raw text, from step 1 or the caller
    pub raw_text: String,

    // Step 2 result
    pub normalized_text: Option<String>,

    // Step 3 result, guaranteed Some after step_extract_parameters
    pub soil_data: Option<SoilDataSet>,

    // Step 4 results
    pub recommendations: Vec<CropRecommendation>,
    pub advice: Vec<SoilAdvice>,

    // Non-fatal warnings
    pub warnings: Vec<PipelineWarning>,
}

impl PipelineContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            raw_text: text.to_string(),
            ..Self::default()
        }
    }
}
