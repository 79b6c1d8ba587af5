use crate::types::assessment::AssessmentResult;
use crate::types::question::{Question, OPTIONS};
use serde_json::json;

pub fn to_json(result: &AssessmentResult) -> Result<String, serde_json::Error> {
    let report = json!({
        "normalized_score": result.normalized_score,
        "percentage": result.percentage(),
        "risk": result.risk,
        "dimension_scores": result.dimension_scores,
        "advice": result.advice,
    });
    serde_json::to_string_pretty(&report)
}

pub fn catalog_to_json(questions: &[Question]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "questions": questions,
        "options": OPTIONS,
    }))
}
