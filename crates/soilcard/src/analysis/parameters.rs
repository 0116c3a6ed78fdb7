use serde::{Deserialize, Serialize};

/// The six parameters tracked on a soil health card, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilParameter {
    #[serde(rename = "pH")]
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    OrganicMatter,
    Moisture,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

impl OptimalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl SoilParameter {
    pub const ALL: [SoilParameter; 6] = [
        SoilParameter::Ph,
        SoilParameter::Nitrogen,
        SoilParameter::Phosphorus,
        SoilParameter::Potassium,
        SoilParameter::OrganicMatter,
        SoilParameter::Moisture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilParameter::Ph => "pH",
            SoilParameter::Nitrogen => "nitrogen",
            SoilParameter::Phosphorus => "phosphorus",
            SoilParameter::Potassium => "potassium",
            SoilParameter::OrganicMatter => "organic_matter",
            SoilParameter::Moisture => "moisture",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SoilParameter::Ph => "",
            SoilParameter::Nitrogen | SoilParameter::Phosphorus | SoilParameter::Potassium => {
                "kg/ha"
            }
            SoilParameter::OrganicMatter | SoilParameter::Moisture => "%",
        }
    }

    /// Value substituted when nothing usable is found on the card.
    pub fn default_value(&self) -> f64 {
        match self {
            SoilParameter::Ph => 6.5,
            SoilParameter::Nitrogen => 120.0,
            SoilParameter::Phosphorus => 25.0,
            SoilParameter::Potassium => 180.0,
            SoilParameter::OrganicMatter => 3.5,
            SoilParameter::Moisture => 30.0,
        }
    }

    /// Inclusive range a captured number must fall in to be believed.
    pub fn plausible_bounds(&self) -> (f64, f64) {
        match self {
            SoilParameter::Ph => (3.0, 12.0),
            SoilParameter::Nitrogen => (0.0, 500.0),
            SoilParameter::Phosphorus => (0.0, 200.0),
            SoilParameter::Potassium => (0.0, 1000.0),
            SoilParameter::OrganicMatter => (0.0, 20.0),
            SoilParameter::Moisture => (0.0, 100.0),
        }
    }

    pub fn is_plausible(&self, value: f64) -> bool {
        let (min, max) = self.plausible_bounds();
        min <= value && value <= max
    }

    pub fn optimal_range(&self) -> OptimalRange {
        match self {
            SoilParameter::Ph => OptimalRange::new(6.0, 7.5),
            SoilParameter::Nitrogen => OptimalRange::new(100.0, 200.0),
            SoilParameter::Phosphorus => OptimalRange::new(20.0, 50.0),
            SoilParameter::Potassium => OptimalRange::new(150.0, 300.0),
            SoilParameter::OrganicMatter => OptimalRange::new(3.0, 5.0),
            SoilParameter::Moisture => OptimalRange::new(25.0, 40.0),
        }
    }
}

impl std::fmt::Display for SoilParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
