//! Text-to-soil-data stages: normalization, pattern extraction and status
//! classification. Everything here is pure and infallible.

pub mod classify;
pub mod extractor;
pub mod normalize;
pub mod parameters;
pub mod types;

pub use classify::classify;
pub use extractor::{extract_parameters, ParameterExtractor};
pub use normalize::normalize_text;
pub use parameters::{OptimalRange, SoilParameter};
pub use types::{ParameterReading, ParameterStatus, SoilDataSet};
