use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Document processing failed: {0}")]
    Processing(#[from] crate::error::ProcessError),
}

/// Non-fatal notes attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineWarning {
    /// Preprocessing was requested but OCR ran on the original image.
    PreprocessingSkipped,
    LowOcrConfidence { confidence: f64, threshold: f64 },
    FewParametersExtracted { extracted: usize, minimum: usize },
}
