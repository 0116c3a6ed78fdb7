use serde::{Deserialize, Serialize};

use super::parameters::{OptimalRange, SoilParameter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    Optimal,
    Low,
    Deficient,
}

impl ParameterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterStatus::Optimal => "optimal",
            ParameterStatus::Low => "low",
            ParameterStatus::Deficient => "deficient",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterReading {
    pub name: SoilParameter,
    pub value: f64,
    pub unit: String,
    pub status: ParameterStatus,
    pub optimal_range: OptimalRange,
    /// `false` when the default was substituted.
    pub extracted: bool,
    pub confidence: f64,
}

/// One reading per [`SoilParameter`], always all six.
#[derive(Debug, Clone, Serialize)]
pub struct SoilDataSet {
    parameters: Vec<ParameterReading>,
    extracted_count: usize,
}

impl SoilDataSet {
    /// Builds the set from readings produced in [`SoilParameter::ALL`] order.
    pub(crate) fn from_readings(parameters: Vec<ParameterReading>) -> Self {
        debug_assert_eq!(parameters.len(), SoilParameter::ALL.len());
        let extracted_count = parameters.iter().filter(|r| r.extracted).count();
        Self {
            parameters,
            extracted_count,
        }
    }

    pub fn parameters(&self) -> &[ParameterReading] {
        &self.parameters
    }

    pub fn extracted_count(&self) -> usize {
        self.extracted_count
    }

    pub fn get(&self, param: SoilParameter) -> Option<&ParameterReading> {
        self.parameters.iter().find(|r| r.name == param)
    }

    pub fn value(&self, param: SoilParameter) -> Option<f64> {
        self.get(param).map(|r| r.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterReading> {
        self.parameters.iter()
    }
}
