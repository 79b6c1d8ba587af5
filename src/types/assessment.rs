use crate::types::question::Dimension;
use serde::{Serialize, Serializer};

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskBand {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

const LOW_BAND: RiskBand = RiskBand {
    label: "Low risk",
    color: "#16a34a",
    description: "Your answers suggest a low current risk of burnout. Keep maintaining healthy habits and balance.",
};

const MODERATE_BAND: RiskBand = RiskBand {
    label: "Moderate risk",
    color: "#f97316",
    description: "There are some signs of stress that could grow into burnout if ignored. It may help to adjust workload and add rest.",
};

const HIGH_BAND: RiskBand = RiskBand {
    label: "High risk",
    color: "#dc2626",
    description: "Your answers suggest several burnout indicators. Consider reaching out for support and making concrete changes to your schedule and habits.",
};

impl RiskLevel {
    pub fn band(self) -> &'static RiskBand {
        match self {
            RiskLevel::Low => &LOW_BAND,
            RiskLevel::Moderate => &MODERATE_BAND,
            RiskLevel::High => &HIGH_BAND,
        }
    }

    pub fn label(self) -> &'static str {
        self.band().label
    }

    pub fn color(self) -> &'static str {
        self.band().color
    }

    pub fn description(self) -> &'static str {
        self.band().description
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.band().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DimensionScores {
    pub sleep: Score,
    pub motivation: Score,
    pub workload: Score,
    pub emotion: Score,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::Sleep => self.sleep,
            Dimension::Motivation => self.motivation,
            Dimension::Workload => self.workload,
            Dimension::Emotion => self.emotion,
        }
    }

    pub fn set(&mut self, dimension: Dimension, score: Score) {
        match dimension {
            Dimension::Sleep => self.sleep = score,
            Dimension::Motivation => self.motivation = score,
            Dimension::Workload => self.workload = score,
            Dimension::Emotion => self.emotion = score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub normalized_score: Score,
    pub risk: RiskLevel,
    pub dimension_scores: DimensionScores,
    pub advice: Vec<String>,
}

impl AssessmentResult {
    /// Whole-number percentage shown on the progress bar.
    pub fn percentage(&self) -> u32 {
        to_percent(self.normalized_score)
    }
}

pub fn to_percent(score: Score) -> u32 {
    (score * 100.0).round() as u32
}
