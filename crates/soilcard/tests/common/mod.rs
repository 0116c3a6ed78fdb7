//! Shared test utilities for soilcard integration tests.
//!
//! This module provides:
//! - `TestHarness` for running the pipeline against files in a temp directory
//! - Builders for configs, card PDFs and card images

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::{RecordingRecognizer, TestHarness};
