pub mod analysis;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod recommend;

pub use analysis::{
    classify, extract_parameters, normalize_text, OptimalRange, ParameterReading, ParameterStatus,
    SoilDataSet, SoilParameter,
};
pub use config::{load_config, load_config_from_str, Config};
pub use error::{ConfigError, ProcessError, Result, SoilcardError};
pub use pipeline::{PipelineConfig, PipelineError, SoilAnalysisPipeline, SoilReport};
pub use processor::{ExtractionMethod, ExtractionResult, MediaType, ProcessorRegistry};
pub use recommend::{recommend_crops, soil_advice, CropRecommendation, SoilAdvice};
