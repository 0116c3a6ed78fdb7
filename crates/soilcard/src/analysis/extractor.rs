use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::classify::classify;
use super::parameters::SoilParameter;
use super::types::{ParameterReading, SoilDataSet};
use crate::config::schema::DEFAULT_PATTERN_CONFIDENCE;

/// Captured number: integer or decimal.
const NUM: &str = r"(\d+(?:\.\d+)?)";
/// Optional separator between a label and its value.
const SEP: &str = r"\s*[:=\-]?\s*";
const KG_HA: &str = r"(?:\(?\s*kg\s*/\s*ha\s*\)?)?";

/// Ordered rules per parameter, most specific first. Read-only after first use.
static PATTERNS: LazyLock<HashMap<SoilParameter, Vec<Regex>>> = LazyLock::new(|| {
    let table: [(SoilParameter, Vec<String>); 6] = [
        (
            SoilParameter::Ph,
            vec![
                format!(r"\bph\s*(?:value|level)?\s*\(\s*1\s*:\s*2(?:\.5)?\s*\){SEP}{NUM}"),
                format!(r"\bsoil\s+ph(?:\s+value)?{SEP}{NUM}"),
                format!(r"\bph\s*(?:value|level)?{SEP}{NUM}"),
                format!(r"\breaction\s*(?:\(\s*ph\s*\))?{SEP}{NUM}"),
            ],
        ),
        (
            SoilParameter::Nitrogen,
            vec![
                format!(r"available\s+nitrogen\s*(?:\(\s*n\s*\))?\s*{KG_HA}{SEP}{NUM}"),
                format!(r"nitrogen\s*(?:\(\s*n\s*\))?\s*{KG_HA}{SEP}{NUM}"),
                format!(r"\bn\s*\(\s*kg\s*/\s*ha\s*\){SEP}{NUM}"),
                format!(r"\bn\s*[:=]\s*{NUM}"),
            ],
        ),
        (
            SoilParameter::Phosphorus,
            vec![
                format!(
                    r"available\s+phosphorus\s*(?:\(\s*(?:p|p2o5)\s*\))?\s*{KG_HA}{SEP}{NUM}"
                ),
                format!(r"phosphorus\s*(?:\(\s*(?:p|p2o5)\s*\))?\s*{KG_HA}{SEP}{NUM}"),
                format!(r"\bp2o5\s*{KG_HA}{SEP}{NUM}"),
                format!(r"\bp\s*\(\s*kg\s*/\s*ha\s*\){SEP}{NUM}"),
                format!(r"\bp\s*[:=]\s*{NUM}"),
            ],
        ),
        (
            SoilParameter::Potassium,
            vec![
                format!(r"available\s+potassium\s*(?:\(\s*(?:k|k2o)\s*\))?\s*{KG_HA}{SEP}{NUM}"),
                format!(r"potassium\s*(?:\(\s*(?:k|k2o)\s*\))?\s*{KG_HA}{SEP}{NUM}"),
                format!(r"\bk2o\s*{KG_HA}{SEP}{NUM}"),
                format!(r"\bk\s*\(\s*kg\s*/\s*ha\s*\){SEP}{NUM}"),
                format!(r"\bk\s*[:=]\s*{NUM}"),
            ],
        ),
        (
            SoilParameter::OrganicMatter,
            vec![
                format!(r"organic\s+matter\s*(?:\(\s*(?:%|om)\s*\))?{SEP}{NUM}"),
                format!(r"\bo\.?m\.?\s*(?:\(\s*%\s*\))?\s*[:=]\s*{NUM}"),
            ],
        ),
        (
            SoilParameter::Moisture,
            vec![
                format!(r"moisture\s+content\s*(?:\(\s*%\s*\))?{SEP}{NUM}"),
                format!(r"\b(?:soil\s+)?moisture\s*(?:\(\s*%\s*\))?{SEP}{NUM}"),
                format!(r"\bm\.?c\.?\s*(?:\(\s*%\s*\))?\s*[:=]\s*{NUM}"),
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(param, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
                .collect();
            (param, compiled)
        })
        .collect()
});

/// Turns normalized card text into a complete [`SoilDataSet`].
#[derive(Debug, Clone)]
pub struct ParameterExtractor {
    confidence: f64,
}

impl ParameterExtractor {
    pub fn new(confidence: f64) -> Self {
        Self { confidence }
    }

    pub fn extract(&self, text: &str) -> SoilDataSet {
        let readings = SoilParameter::ALL
            .iter()
            .map(|&param| self.read_parameter(param, text))
            .collect();

        let data = SoilDataSet::from_readings(readings);
        log::debug!(
            "Extracted {}/{} soil parameters",
            data.extracted_count(),
            SoilParameter::ALL.len()
        );
        data
    }

    fn read_parameter(&self, param: SoilParameter, text: &str) -> ParameterReading {
        let (value, extracted, confidence) = match match_value(param, text) {
            Some(value) => (value, true, self.confidence),
            None => (param.default_value(), false, 0.0),
        };

        let optimal_range = param.optimal_range();
        ParameterReading {
            name: param,
            value,
            unit: param.unit().to_string(),
            status: classify(value, optimal_range),
            optimal_range,
            extracted,
            confidence,
        }
    }
}

impl Default for ParameterExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN_CONFIDENCE)
    }
}

/// First in-bounds value across the parameter's rules, if any.
fn match_value(param: SoilParameter, text: &str) -> Option<f64> {
    let patterns = PATTERNS.get(&param)?;

    patterns.iter().find_map(|regex| {
        let caps = regex.captures(text)?;
        let value: f64 = caps.get(1)?.as_str().parse().ok()?;

        if param.is_plausible(value) {
            Some(value)
        } else {
            log::debug!(
                "Rejected {} = {} (outside plausible bounds {:?})",
                param,
                value,
                param.plausible_bounds()
            );
            None
        }
    })
}

/// Extracts with the default pattern confidence.
pub fn extract_parameters(text: &str) -> SoilDataSet {
    ParameterExtractor::default().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize_text;
    use crate::analysis::types::ParameterStatus;

    fn value_of(data: &SoilDataSet, param: SoilParameter) -> f64 {
        data.value(param).unwrap()
    }

    #[test]
    fn test_every_parameter_has_patterns() {
        for param in SoilParameter::ALL {
            assert!(
                PATTERNS.get(&param).is_some_and(|p| !p.is_empty()),
                "no patterns for {}",
                param
            );
        }
    }

    #[test]
    fn test_full_card_extraction() {
        let text = normalize_text(
            "pH: 6.8 Nitrogen (N): 145 kg/ha Phosphorus (P): 28 kg/ha Potassium (K): 195 kg/ha \
             Organic Matter: 4.2% Moisture Content: 35%",
        );
        let data = extract_parameters(&text);

        assert_eq!(data.extracted_count(), 6);
        let expected = [
            (SoilParameter::Ph, 6.8),
            (SoilParameter::Nitrogen, 145.0),
            (SoilParameter::Phosphorus, 28.0),
            (SoilParameter::Potassium, 195.0),
            (SoilParameter::OrganicMatter, 4.2),
            (SoilParameter::Moisture, 35.0),
        ];
        for (param, value) in expected {
            let reading = data.get(param).unwrap();
            assert_eq!(reading.value, value, "{}", param);
            assert!(reading.extracted);
            assert_eq!(reading.confidence, DEFAULT_PATTERN_CONFIDENCE);
            assert_eq!(reading.status, ParameterStatus::Optimal, "{}", param);
        }
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let data = extract_parameters("");

        assert_eq!(data.extracted_count(), 0);
        assert_eq!(data.parameters().len(), 6);
        for (reading, param) in data.iter().zip(SoilParameter::ALL) {
            assert_eq!(reading.name, param);
            assert_eq!(reading.value, param.default_value());
            assert!(!reading.extracted);
            assert_eq!(reading.confidence, 0.0);
        }
    }

    #[test]
    fn test_out_of_bounds_value_falls_back() {
        let data = extract_parameters("ph: 99");
        let reading = data.get(SoilParameter::Ph).unwrap();
        assert!(!reading.extracted);
        assert_eq!(reading.value, 6.5);
        assert_eq!(data.extracted_count(), 0);
    }

    #[test]
    fn test_later_pattern_used_when_first_out_of_bounds() {
        // "nitrogen: 2024" is out of bounds; the bare "n:" rule still finds 150
        let data = extract_parameters("nitrogen: 2024 n: 150");
        assert_eq!(value_of(&data, SoilParameter::Nitrogen), 150.0);
        assert!(data.get(SoilParameter::Nitrogen).unwrap().extracted);
    }

    #[test]
    fn test_split_decimal_after_normalization() {
        let data = extract_parameters(&normalize_text("pH : 6 . 8"));
        assert_eq!(value_of(&data, SoilParameter::Ph), 6.8);
    }

    #[test]
    fn test_specific_label_preferred_over_bare_letter() {
        let data = extract_parameters("n: 90 nitrogen (kg/ha): 145");
        assert_eq!(value_of(&data, SoilParameter::Nitrogen), 145.0);
    }

    #[test]
    fn test_bare_letter_rules() {
        let data = extract_parameters("n: 160 p: 30 k: 210");
        assert_eq!(value_of(&data, SoilParameter::Nitrogen), 160.0);
        assert_eq!(value_of(&data, SoilParameter::Phosphorus), 30.0);
        assert_eq!(value_of(&data, SoilParameter::Potassium), 210.0);
        assert_eq!(data.extracted_count(), 3);
    }

    #[test]
    fn test_oxide_labels() {
        let data = extract_parameters("p2o5 (kg/ha) 42 k2o - 310");
        assert_eq!(value_of(&data, SoilParameter::Phosphorus), 42.0);
        assert_eq!(value_of(&data, SoilParameter::Potassium), 310.0);
    }

    #[test]
    fn test_ph_ratio_label() {
        let data = extract_parameters("ph (1:2.5) 7.2");
        assert_eq!(value_of(&data, SoilParameter::Ph), 7.2);
    }

    #[test]
    fn test_phosphorus_not_mistaken_for_ph() {
        let data = extract_parameters("phosphorus: 8.5");
        assert!(!data.get(SoilParameter::Ph).unwrap().extracted);
        assert_eq!(value_of(&data, SoilParameter::Phosphorus), 8.5);
    }

    #[test]
    fn test_extracted_value_gets_classified() {
        let data = extract_parameters("nitrogen: 40 moisture: 45");
        let nitrogen = data.get(SoilParameter::Nitrogen).unwrap();
        assert_eq!(nitrogen.status, ParameterStatus::Deficient);
        let moisture = data.get(SoilParameter::Moisture).unwrap();
        assert_eq!(moisture.status, ParameterStatus::Low);
    }

    #[test]
    fn test_custom_confidence() {
        let data = ParameterExtractor::new(70.0).extract("ph 7.0");
        assert_eq!(data.get(SoilParameter::Ph).unwrap().confidence, 70.0);
        assert_eq!(data.get(SoilParameter::Nitrogen).unwrap().confidence, 0.0);
    }

    #[test]
    fn test_noise_text_always_complete() {
        let samples = [
            "page 1 of 2 date 12/03/2024",
            "ph ph ph : : :",
            "n: k: p:",
            "moisture 1000% ph 0.5",
        ];
        for sample in samples {
            let data = extract_parameters(&normalize_text(sample));
            assert_eq!(data.parameters().len(), 6);
            let count = data.iter().filter(|r| r.extracted).count();
            assert_eq!(data.extracted_count(), count);
        }
    }
}
