use crate::types::assessment::{DimensionScores, Score};
use crate::types::question::Dimension;

pub const ADVICE_THRESHOLD: Score = 0.5;

pub const BALANCED_ADVICE: &str = "You seem relatively balanced right now. Continue checking in with yourself regularly and protect your rest, boundaries, and social connections.";

pub fn dimension_tip(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Sleep => "• Sleep: Try to set a fixed sleep schedule, limit screens before bed, and avoid taking work into late-night hours.",
        Dimension::Workload => "• Workload: Break tasks into smaller pieces, prioritize the most important ones, and talk with your supervisor/teacher if expectations feel unrealistic.",
        Dimension::Motivation => "• Motivation: Reconnect with your long-term goals, celebrate small wins, and include activities you enjoy during the week.",
        Dimension::Emotion => "• Emotions: Practice short breaks, breathing exercises, or journaling. Consider talking to a trusted friend, mentor, or counselor.",
    }
}

/// Tips for every dimension scoring strictly above the threshold, in
/// sleep, workload, motivation, emotion order. Never empty.
pub fn generate_advice(scores: &DimensionScores) -> Vec<String> {
    let mut advice = Dimension::ADVICE_ORDER
        .iter()
        .filter(|dimension| scores.get(**dimension) > ADVICE_THRESHOLD)
        .map(|dimension| dimension_tip(*dimension).to_string())
        .collect::<Vec<_>>();
    if advice.is_empty() {
        advice.push(BALANCED_ADVICE.to_string());
    }
    advice
}
