use crate::types::assessment::{RiskLevel, Score};

pub const LOW_UPPER_BOUND: Score = 0.33;
pub const MODERATE_UPPER_BOUND: Score = 0.66;

pub fn classify(normalized_score: Score) -> RiskLevel {
    if normalized_score < LOW_UPPER_BOUND {
        RiskLevel::Low
    } else if normalized_score < MODERATE_UPPER_BOUND {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}
