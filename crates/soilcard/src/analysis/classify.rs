use super::parameters::OptimalRange;
use super::types::ParameterStatus;

const LOW_TOLERANCE: f64 = 0.7;
const HIGH_TOLERANCE: f64 = 1.3;

/// Places a value relative to its optimal band. Values up to 30% above the
/// band still count as `Low`, the same way values down to 70% of the minimum do.
pub fn classify(value: f64, range: OptimalRange) -> ParameterStatus {
    if range.contains(value) {
        return ParameterStatus::Optimal;
    }

    if value < range.min {
        if value >= LOW_TOLERANCE * range.min {
            ParameterStatus::Low
        } else {
            ParameterStatus::Deficient
        }
    } else if value <= HIGH_TOLERANCE * range.max {
        ParameterStatus::Low
    } else {
        ParameterStatus::Deficient
    }
}
