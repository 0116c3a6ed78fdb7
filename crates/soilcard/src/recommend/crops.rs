//! Rule-based crop suitability scoring.
//!
//! Every crop carries an ideal band and a weight per soil parameter. A
//! parameter inside its band scores 100; outside it the score falls off
//! linearly with the distance, reaching 0 one band-width away. The crop's
//! score is the weighted average of the six.

use serde::Serialize;

use crate::analysis::{OptimalRange, SoilDataSet, SoilParameter};

const HIGHLY_SUITABLE: f64 = 80.0;
const SUITABLE: f64 = 60.0;

/// Parameters scoring below this are reported as limiting.
const LIMITING_SCORE: f64 = 60.0;

#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    pub name: &'static str,
    /// Ideal band and weight, in [`SoilParameter::ALL`] order.
    pub ideal: [(OptimalRange, f64); 6],
}

impl CropProfile {
    fn band(&self, param: SoilParameter) -> (OptimalRange, f64) {
        let index = SoilParameter::ALL
            .iter()
            .position(|p| *p == param)
            .unwrap_or(0);
        self.ideal[index]
    }
}

const fn band(min: f64, max: f64, weight: f64) -> (OptimalRange, f64) {
    (OptimalRange::new(min, max), weight)
}

pub const CROP_PROFILES: [CropProfile; 10] = [
    CropProfile {
        name: "rice",
        ideal: [
            band(5.5, 7.0, 1.5),
            band(120.0, 250.0, 1.0),
            band(20.0, 50.0, 1.0),
            band(150.0, 300.0, 1.0),
            band(2.5, 5.0, 0.75),
            band(35.0, 60.0, 1.5),
        ],
    },
    CropProfile {
        name: "wheat",
        ideal: [
            band(6.0, 7.5, 1.5),
            band(100.0, 200.0, 1.0),
            band(20.0, 50.0, 1.0),
            band(120.0, 250.0, 1.0),
            band(2.0, 4.5, 0.75),
            band(20.0, 35.0, 1.0),
        ],
    },
    CropProfile {
        name: "maize",
        ideal: [
            band(5.8, 7.0, 1.5),
            band(120.0, 220.0, 1.25),
            band(25.0, 55.0, 1.0),
            band(150.0, 300.0, 1.0),
            band(2.5, 5.0, 0.75),
            band(25.0, 40.0, 1.0),
        ],
    },
    CropProfile {
        name: "cotton",
        ideal: [
            band(6.0, 8.0, 1.5),
            band(80.0, 160.0, 1.0),
            band(15.0, 40.0, 1.0),
            band(150.0, 300.0, 1.25),
            band(1.5, 4.0, 0.75),
            band(20.0, 35.0, 1.0),
        ],
    },
    CropProfile {
        name: "sugarcane",
        ideal: [
            band(6.0, 7.5, 1.5),
            band(150.0, 300.0, 1.25),
            band(25.0, 60.0, 1.0),
            band(200.0, 400.0, 1.25),
            band(3.0, 6.0, 0.75),
            band(35.0, 55.0, 1.25),
        ],
    },
    CropProfile {
        name: "soybean",
        ideal: [
            band(6.0, 7.0, 1.5),
            band(40.0, 120.0, 0.5),
            band(20.0, 50.0, 1.25),
            band(150.0, 280.0, 1.0),
            band(2.5, 5.0, 0.75),
            band(25.0, 40.0, 1.0),
        ],
    },
    CropProfile {
        name: "groundnut",
        ideal: [
            band(6.0, 7.0, 1.5),
            band(30.0, 100.0, 0.5),
            band(20.0, 45.0, 1.25),
            band(120.0, 250.0, 1.0),
            band(1.5, 4.0, 0.75),
            band(20.0, 35.0, 1.0),
        ],
    },
    CropProfile {
        name: "potato",
        ideal: [
            band(5.0, 6.5, 1.5),
            band(120.0, 200.0, 1.0),
            band(30.0, 60.0, 1.0),
            band(200.0, 350.0, 1.25),
            band(3.0, 6.0, 1.0),
            band(30.0, 45.0, 1.0),
        ],
    },
    CropProfile {
        name: "tomato",
        ideal: [
            band(6.0, 7.0, 1.5),
            band(100.0, 180.0, 1.0),
            band(30.0, 60.0, 1.0),
            band(180.0, 320.0, 1.0),
            band(3.0, 6.0, 1.0),
            band(25.0, 40.0, 1.0),
        ],
    },
    CropProfile {
        name: "chickpea",
        ideal: [
            band(6.0, 8.0, 1.5),
            band(20.0, 80.0, 0.5),
            band(20.0, 45.0, 1.0),
            band(100.0, 220.0, 1.0),
            band(1.0, 3.5, 0.75),
            band(15.0, 30.0, 1.0),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Suitability {
    HighlySuitable,
    Suitable,
    Marginal,
}

impl Suitability {
    fn from_score(score: f64) -> Self {
        if score >= HIGHLY_SUITABLE {
            Suitability::HighlySuitable
        } else if score >= SUITABLE {
            Suitability::Suitable
        } else {
            Suitability::Marginal
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CropRecommendation {
    pub crop: String,
    /// Weighted suitability, 0-100, one decimal.
    pub score: f64,
    pub suitability: Suitability,
    pub limiting_factors: Vec<SoilParameter>,
}

/// Scores one value against an ideal band.
fn parameter_score(value: f64, range: OptimalRange) -> f64 {
    if range.contains(value) {
        return 100.0;
    }

    let width = if range.max > range.min {
        range.max - range.min
    } else {
        range.max.abs().max(1.0)
    };
    let distance = if value < range.min {
        range.min - value
    } else {
        value - range.max
    };

    100.0 * (1.0 - distance / width).max(0.0)
}

fn score_crop(profile: &CropProfile, data: &SoilDataSet) -> CropRecommendation {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    let mut limiting_factors = Vec::new();

    for param in SoilParameter::ALL {
        let value = data.value(param).unwrap_or_else(|| param.default_value());
        let (range, weight) = profile.band(param);
        let score = parameter_score(value, range);

        if score < LIMITING_SCORE {
            limiting_factors.push(param);
        }
        weighted += score * weight;
        total_weight += weight;
    }

    let score = if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    };
    let score = (score * 10.0).round() / 10.0;

    CropRecommendation {
        crop: profile.name.to_string(),
        score,
        suitability: Suitability::from_score(score),
        limiting_factors,
    }
}

/// Best-suited crops first, at most `max_results`.
pub fn recommend_crops(data: &SoilDataSet, max_results: usize) -> Vec<CropRecommendation> {
    let mut recommendations: Vec<CropRecommendation> = CROP_PROFILES
        .iter()
        .map(|profile| score_crop(profile, data))
        .collect();

    recommendations.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.crop.cmp(&b.crop))
    });
    recommendations.truncate(max_results);
    recommendations
}
