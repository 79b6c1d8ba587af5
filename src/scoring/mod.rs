pub mod advice;
pub mod risk;

use crate::error::{BurnoutError, Result};
use crate::types::answers::AnswerSet;
use crate::types::assessment::{AssessmentResult, DimensionScores, Score};
use crate::types::question::{Dimension, Question, MAX_RESPONSE, MIN_RESPONSE};
use std::collections::BTreeMap;
use tracing::debug;

const SPAN: u32 = (MAX_RESPONSE - MIN_RESPONSE) as u32;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    sum: u32,
    count: u32,
}

impl Tally {
    fn add(&mut self, value: u8) {
        self.sum += u32::from(value);
        self.count += 1;
    }

    /// Min-max normalization against `count` items on the 1..=5 scale.
    fn normalized(&self) -> Score {
        if self.count == 0 {
            return 0.0;
        }
        let min = self.count * u32::from(MIN_RESPONSE);
        f64::from(self.sum - min) / f64::from(self.count * SPAN)
    }
}

/// Scores a complete answer set against `questions`.
///
/// Fails with [`BurnoutError::MissingAnswer`] for the first question, in
/// catalog order, that has no answer. Answers for ids outside the catalog
/// are ignored.
pub fn score(answers: &AnswerSet, questions: &[Question]) -> Result<AssessmentResult> {
    let mut total = Tally::default();
    let mut per_dimension = BTreeMap::<Dimension, Tally>::new();

    for question in questions {
        let raw = answers
            .get(question.id)
            .ok_or_else(|| BurnoutError::MissingAnswer(question.id.to_string()))?;
        let value = question.effective_value(raw);
        total.add(value);
        per_dimension
            .entry(question.dimension)
            .or_default()
            .add(value);
    }

    let normalized_score = total.normalized();
    let mut dimension_scores = DimensionScores::default();
    for dimension in Dimension::ADVICE_ORDER {
        let tally = per_dimension.get(&dimension).copied().unwrap_or_default();
        dimension_scores.set(dimension, tally.normalized());
    }

    let risk = risk::classify(normalized_score);
    let advice = advice::generate_advice(&dimension_scores);
    debug!(
        raw_total = total.sum,
        normalized_score,
        risk = risk.label(),
        advice_lines = advice.len(),
        "scored assessment"
    );

    Ok(AssessmentResult {
        normalized_score,
        risk,
        dimension_scores,
        advice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::assessment::RiskLevel;
    use crate::types::question::QUESTIONS;

    fn uniform(value: i64) -> AnswerSet {
        QUESTIONS
            .iter()
            .try_fold(AnswerSet::new(), |answers, question| {
                answers.with_answer(question.id, value)
            })
            .expect("uniform answers should record")
    }

    /// Answers chosen so every effective value equals `effective`.
    fn effective(effective: u8) -> AnswerSet {
        QUESTIONS
            .iter()
            .try_fold(AnswerSet::new(), |answers, question| {
                let raw = question.effective_value(effective);
                answers.with_answer(question.id, i64::from(raw))
            })
            .expect("answers should record")
    }

    fn all_in_unit_range(result: &AssessmentResult) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&result.normalized_score)
            && Dimension::ADVICE_ORDER
                .iter()
                .all(|dimension| unit.contains(&result.dimension_scores.get(*dimension)))
    }

    #[test]
    fn all_threes_is_moderate_with_balanced_advice() {
        let result = score(&uniform(3), &QUESTIONS).expect("complete answers should score");
        assert_eq!(result.normalized_score, 0.5);
        assert_eq!(result.risk, RiskLevel::Moderate);
        for dimension in Dimension::ADVICE_ORDER {
            assert_eq!(result.dimension_scores.get(dimension), 0.5);
        }
        assert_eq!(result.advice, vec![advice::BALANCED_ADVICE.to_string()]);
    }

    #[test]
    fn all_minimum_effective_values_score_zero() {
        let result = score(&effective(1), &QUESTIONS).expect("complete answers should score");
        assert_eq!(result.normalized_score, 0.0);
        assert_eq!(result.risk, RiskLevel::Low);
        assert_eq!(result.dimension_scores, DimensionScores::default());
        assert_eq!(result.advice, vec![advice::BALANCED_ADVICE.to_string()]);
    }

    #[test]
    fn all_maximum_effective_values_score_one() {
        let result = score(&effective(5), &QUESTIONS).expect("complete answers should score");
        assert_eq!(result.normalized_score, 1.0);
        assert_eq!(result.risk, RiskLevel::High);
        assert_eq!(result.advice.len(), 4);
        assert!(result.advice[0].starts_with("• Sleep:"));
        assert!(result.advice[1].starts_with("• Workload:"));
        assert!(result.advice[2].starts_with("• Motivation:"));
        assert!(result.advice[3].starts_with("• Emotions:"));
    }

    #[test]
    fn uniform_raw_answers_stay_in_unit_range() {
        for value in 1..=5 {
            let result = score(&uniform(value), &QUESTIONS).expect("complete answers should score");
            assert!(all_in_unit_range(&result), "value {value} left unit range");
        }
    }

    #[test]
    fn mixed_answers_stay_in_unit_range() {
        for seed in 0..50u32 {
            let answers = QUESTIONS
                .iter()
                .enumerate()
                .try_fold(AnswerSet::new(), |answers, (index, question)| {
                    let value = (seed as usize * 7 + index * 3) % 5 + 1;
                    answers.with_answer(question.id, value as i64)
                })
                .expect("answers should record");
            let result = score(&answers, &QUESTIONS).expect("complete answers should score");
            assert!(all_in_unit_range(&result), "seed {seed} left unit range");
        }
    }

    #[test]
    fn reverse_item_matches_flipped_forward_item() {
        let reversed = Question {
            id: "q",
            text: "reverse",
            dimension: Dimension::Sleep,
            reverse: true,
        };
        let forward = Question {
            reverse: false,
            ..reversed
        };
        for raw in 1..=5i64 {
            let reversed_result = score(
                &AnswerSet::new().with_answer("q", raw).expect("answer should record"),
                &[reversed],
            )
            .expect("answer should score");
            let forward_result = score(
                &AnswerSet::new()
                    .with_answer("q", 6 - raw)
                    .expect("answer should record"),
                &[forward],
            )
            .expect("answer should score");
            assert_eq!(reversed_result, forward_result);
        }
    }

    #[test]
    fn sleep_only_answers_trigger_sleep_tip_first() {
        let answers = effective(1)
            .with_answer("sleep_quality", 1)
            .and_then(|answers| answers.with_answer("sleep_problems", 5))
            .expect("answers should record");
        let result = score(&answers, &QUESTIONS).expect("complete answers should score");
        assert_eq!(result.dimension_scores.sleep, 1.0);
        assert_eq!(result.normalized_score, 0.2);
        assert_eq!(result.risk, RiskLevel::Low);
        assert_eq!(
            result.advice,
            vec![advice::dimension_tip(Dimension::Sleep).to_string()]
        );
    }

    #[test]
    fn scoring_is_idempotent() {
        let answers = effective(4)
            .with_answer("cynicism", 2)
            .expect("answer should record");
        let first = score(&answers, &QUESTIONS).expect("complete answers should score");
        let second = score(&answers, &QUESTIONS).expect("complete answers should score");
        assert_eq!(first, second);
        assert_eq!(
            first.normalized_score.to_bits(),
            second.normalized_score.to_bits()
        );
    }

    #[test]
    fn missing_answer_reports_first_gap_in_catalog_order() {
        let answers = QUESTIONS
            .iter()
            .filter(|question| !matches!(question.id, "cynicism" | "detachment"))
            .try_fold(AnswerSet::new(), |answers, question| {
                answers.with_answer(question.id, 3)
            })
            .expect("answers should record");
        let err = score(&answers, &QUESTIONS).expect_err("incomplete answers should fail");
        assert!(matches!(err, BurnoutError::MissingAnswer(id) if id == "cynicism"));
    }

    #[test]
    fn extra_answers_are_ignored() {
        let answers = uniform(3)
            .with_answer("not_in_catalog", 5)
            .expect("answer should record");
        let result = score(&answers, &QUESTIONS).expect("complete answers should score");
        assert_eq!(result, score(&uniform(3), &QUESTIONS).expect("should score"));
    }

    #[test]
    fn empty_catalog_scores_zero_without_nan() {
        let result = score(&AnswerSet::new(), &[]).expect("empty catalog should score");
        assert_eq!(result.normalized_score, 0.0);
        assert_eq!(result.risk, RiskLevel::Low);
        assert_eq!(result.dimension_scores, DimensionScores::default());
    }
}
