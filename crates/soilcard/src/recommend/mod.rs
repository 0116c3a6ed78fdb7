pub mod advice;
pub mod crops;

pub use advice::{soil_advice, AdviceDirection, SoilAdvice};
pub use crops::{recommend_crops, CropProfile, CropRecommendation, Suitability, CROP_PROFILES};
