use serde::Serialize;

use crate::analysis::{ParameterStatus, SoilDataSet, SoilParameter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceDirection {
    Below,
    Above,
}

#[derive(Debug, Clone, Serialize)]
pub struct SoilAdvice {
    pub parameter: SoilParameter,
    pub status: ParameterStatus,
    pub direction: AdviceDirection,
    pub suggestion: &'static str,
}

fn suggestion(param: SoilParameter, direction: AdviceDirection) -> &'static str {
    use AdviceDirection::{Above, Below};

    match (param, direction) {
        (SoilParameter::Ph, Below) => "Apply agricultural lime to raise soil pH",
        (SoilParameter::Ph, Above) => "Apply gypsum or elemental sulphur to lower soil pH",
        (SoilParameter::Nitrogen, Below) => {
            "Apply nitrogen fertilizer such as urea, or well-rotted farmyard manure"
        }
        (SoilParameter::Nitrogen, Above) => {
            "Cut back nitrogen application; excess causes lodging and leaching"
        }
        (SoilParameter::Phosphorus, Below) => {
            "Apply phosphatic fertilizer such as DAP or single super phosphate"
        }
        (SoilParameter::Phosphorus, Above) => "Skip phosphorus fertilizer this season",
        (SoilParameter::Potassium, Below) => "Apply muriate of potash (MOP)",
        (SoilParameter::Potassium, Above) => "Reduce potash application",
        (SoilParameter::OrganicMatter, Below) => {
            "Incorporate compost, farmyard manure or a green manure crop"
        }
        (SoilParameter::OrganicMatter, Above) => "Organic matter is high; check field drainage",
        (SoilParameter::Moisture, Below) => "Increase irrigation or mulch to conserve moisture",
        (SoilParameter::Moisture, Above) => "Improve drainage to avoid waterlogging",
    }
}

/// One amendment suggestion per reading outside its optimal range.
pub fn soil_advice(data: &SoilDataSet) -> Vec<SoilAdvice> {
    data.iter()
        .filter(|reading| reading.status != ParameterStatus::Optimal)
        .map(|reading| {
            let direction = if reading.value < reading.optimal_range.min {
                AdviceDirection::Below
            } else {
                AdviceDirection::Above
            };
            SoilAdvice {
                parameter: reading.name,
                status: reading.status,
                direction,
                suggestion: suggestion(reading.name, direction),
            }
        })
        .collect()
}
