use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info_span, warn};

use crate::analysis::{normalize_text, ParameterExtractor, SoilDataSet};
use crate::processor::{
    ExtractionMethod, ExtractionResult, ImageProcessor, ProcessorRegistry, TextRecognizer,
};
use crate::recommend::{recommend_crops, soil_advice, CropRecommendation, SoilAdvice};

use super::config::PipelineConfig;
use super::context::PipelineContext;
use super::error::{PipelineError, PipelineWarning};

/// OCR results below this confidence are flagged in the report.
pub const LOW_OCR_CONFIDENCE: f64 = 60.0;

/// Fewer extracted parameters than this usually means the wrong document or a bad scan.
pub const MIN_EXTRACTED_PARAMETERS: usize = 3;

/// Everything the pipeline learned about one soil-health card.
#[derive(Debug, Clone, Serialize)]
pub struct SoilReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction: Option<ExtractionResult>,
    pub soil_data: SoilDataSet,
    pub recommendations: Vec<CropRecommendation>,
    pub advice: Vec<SoilAdvice>,
    pub analyzed_at: DateTime<Utc>,
    pub warnings: Vec<PipelineWarning>,
}

pub struct SoilAnalysisPipeline {
    config: PipelineConfig,
    processor: ProcessorRegistry,
    extractor: ParameterExtractor,
}

impl SoilAnalysisPipeline {
    /// Production constructor. Builds the Tesseract recognizer when OCR is enabled.
    pub fn from_config(config: PipelineConfig) -> Self {
        let recognizer = default_recognizer(&config);
        Self::new(config, recognizer)
    }

    /// Uses `recognizer` for image uploads; with `None` only PDFs are accepted.
    pub fn new(config: PipelineConfig, recognizer: Option<Box<dyn TextRecognizer>>) -> Self {
        let image = recognizer.map(|recognizer| {
            ImageProcessor::new(
                recognizer,
                config.preprocess,
                config.temp_directory.clone(),
            )
        });
        let processor = ProcessorRegistry::new(config.pdf_confidence, image);
        let extractor = ParameterExtractor::new(config.pattern_confidence);

        Self {
            config,
            processor,
            extractor,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every step for the document at `path`, declared as `mime`.
    pub fn analyze(&mut self, path: &Path, mime: &str) -> Result<SoilReport, PipelineError> {
        let _pipeline_span = info_span!("pipeline", mime = mime).entered();
        let mut ctx = PipelineContext::new();

        {
            let _step = info_span!("pipeline.acquire_text").entered();
            self.step_acquire_text(&mut ctx, path, mime)?;
        }

        self.run_analysis_steps(&mut ctx);
        Ok(self.finish(ctx))
    }

    /// Run the steps after text acquisition on text the caller already holds.
    pub fn analyze_text(&self, text: &str) -> SoilReport {
        let _pipeline_span = info_span!("pipeline", source = "text").entered();
        let mut ctx = PipelineContext::from_text(text);

        self.run_analysis_steps(&mut ctx);
        self.finish(ctx)
    }

    fn run_analysis_steps(&self, ctx: &mut PipelineContext) {
        {
            let _step = info_span!("pipeline.normalize").entered();
            self.step_normalize(ctx);
        }

        {
            let _step = info_span!("pipeline.extract_parameters").entered();
            self.step_extract_parameters(ctx);
        }

        {
            let _step = info_span!("pipeline.recommend").entered();
            self.step_recommend(ctx);
        }
    }

    fn step_acquire_text(
        &mut self,
        ctx: &mut PipelineContext,
        path: &Path,
        mime: &str,
    ) -> Result<(), PipelineError> {
        let extraction = self.processor.process(path, mime)?;

        log::info!(
            "Acquired {} chars from {} via {:?} (confidence {:.1}, {} ms)",
            extraction.text.len(),
            path.display(),
            extraction.method,
            extraction.confidence,
            extraction.processing_time_ms
        );

        if extraction.method.is_ocr() {
            if self.config.preprocess && extraction.method != ExtractionMethod::OcrPreprocessed {
                ctx.warnings.push(PipelineWarning::PreprocessingSkipped);
            }
            if extraction.confidence < LOW_OCR_CONFIDENCE {
                warn!(
                    "Low OCR confidence {:.1} for {}",
                    extraction.confidence,
                    path.display()
                );
                ctx.warnings.push(PipelineWarning::LowOcrConfidence {
                    confidence: extraction.confidence,
                    threshold: LOW_OCR_CONFIDENCE,
                });
            }
        }

        ctx.raw_text = extraction.text.clone();
        ctx.extraction = Some(extraction);
        Ok(())
    }

    fn step_normalize(&self, ctx: &mut PipelineContext) {
        let normalized = normalize_text(&ctx.raw_text);
        debug!(
            "Normalized text: {} -> {} chars",
            ctx.raw_text.len(),
            normalized.len()
        );
        ctx.normalized_text = Some(normalized);
    }

    fn step_extract_parameters(&self, ctx: &mut PipelineContext) {
        let text = ctx.normalized_text.as_deref().unwrap_or_default();
        let data = self.extractor.extract(text);

        if data.extracted_count() < MIN_EXTRACTED_PARAMETERS {
            warn!(
                "Only {} soil parameters found; defaults substituted for the rest",
                data.extracted_count()
            );
            ctx.warnings.push(PipelineWarning::FewParametersExtracted {
                extracted: data.extracted_count(),
                minimum: MIN_EXTRACTED_PARAMETERS,
            });
        }

        ctx.soil_data = Some(data);
    }

    fn step_recommend(&self, ctx: &mut PipelineContext) {
        if !self.config.recommendations_enabled {
            debug!("Recommendations disabled, skipping");
            return;
        }

        if let Some(data) = &ctx.soil_data {
            ctx.recommendations = recommend_crops(data, self.config.max_recommendations);
            ctx.advice = soil_advice(data);
        }
    }

    fn finish(&self, ctx: PipelineContext) -> SoilReport {
        // Empty text yields the all-defaults set, same as a card with no matches.
        let soil_data = ctx.soil_data.unwrap_or_else(|| self.extractor.extract(""));

        SoilReport {
            extraction: ctx.extraction,
            soil_data,
            recommendations: ctx.recommendations,
            advice: ctx.advice,
            analyzed_at: Utc::now(),
            warnings: ctx.warnings,
        }
    }
}

#[cfg(feature = "ocr")]
fn default_recognizer(config: &PipelineConfig) -> Option<Box<dyn TextRecognizer>> {
    if !config.ocr_enabled {
        return None;
    }

    let recognizer = crate::processor::TesseractRecognizer::new(
        &config.ocr_languages,
        config.ocr_data_path.clone(),
    );
    Some(Box::new(recognizer))
}

#[cfg(not(feature = "ocr"))]
fn default_recognizer(config: &PipelineConfig) -> Option<Box<dyn TextRecognizer>> {
    if config.ocr_enabled {
        log::warn!("OCR requested but soilcard was built without the `ocr` feature");
    }
    None
}
