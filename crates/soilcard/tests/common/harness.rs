//! Test harness for isolated pipeline runs.
//!
//! `TestHarness` owns a temp directory for uploaded cards and a scratch
//! directory for preprocessed images, and builds pipelines around a
//! `RecordingRecognizer` so no Tesseract install is needed.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use soilcard::config::Config;
use soilcard::error::ProcessError;
use soilcard::processor::{Recognition, TextRecognizer};
use soilcard::{PipelineConfig, SoilAnalysisPipeline};

/// Returns canned OCR output and remembers which files it was shown.
#[derive(Clone)]
pub struct RecordingRecognizer {
    text: String,
    confidence: f64,
    seen: Rc<RefCell<Vec<PathBuf>>>,
}

impl RecordingRecognizer {
    pub fn new(text: &str, confidence: f64) -> Self {
        Self {
            text: text.to_string(),
            confidence,
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn seen(&self) -> Vec<PathBuf> {
        self.seen.borrow().clone()
    }
}

impl TextRecognizer for RecordingRecognizer {
    fn recognize(&mut self, image_path: &Path) -> Result<Recognition, ProcessError> {
        assert!(
            image_path.exists(),
            "recognizer handed a missing file: {}",
            image_path.display()
        );
        self.seen.borrow_mut().push(image_path.to_path_buf());
        Ok(Recognition {
            text: self.text.clone(),
            confidence: self.confidence,
        })
    }
}

pub struct TestHarness {
    temp_dir: TempDir,
    /// Where uploaded cards are written.
    pub upload_dir: PathBuf,
    /// Where the pipeline writes preprocessed images.
    pub scratch_dir: PathBuf,
    config: Config,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let upload_dir = temp_dir.path().join("uploads");
        let scratch_dir = temp_dir.path().join("scratch");
        std::fs::create_dir_all(&upload_dir).expect("Failed to create upload directory");
        std::fs::create_dir_all(&scratch_dir).expect("Failed to create scratch directory");

        Self {
            temp_dir,
            upload_dir,
            scratch_dir,
            config,
        }
    }

    /// Write an uploaded file and return its path.
    pub fn upload(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.upload_dir.join(name);
        std::fs::write(&path, bytes).expect("Failed to write upload");
        path
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::from_config(&self.config);
        config.temp_directory = Some(self.scratch_dir.clone());
        config
    }

    /// Pipeline that can only read PDFs.
    pub fn pdf_pipeline(&self) -> SoilAnalysisPipeline {
        SoilAnalysisPipeline::new(self.pipeline_config(), None)
    }

    /// Pipeline whose OCR step answers with `recognizer`.
    pub fn ocr_pipeline(&self, recognizer: &RecordingRecognizer) -> SoilAnalysisPipeline {
        SoilAnalysisPipeline::new(self.pipeline_config(), Some(Box::new(recognizer.clone())))
    }

    /// Files left behind in the scratch directory.
    pub fn scratch_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.scratch_dir)
            .expect("Failed to read scratch directory")
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect()
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
