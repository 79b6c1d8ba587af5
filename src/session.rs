use crate::error::{BurnoutError, Result};
use crate::scoring;
use crate::types::answers::AnswerSet;
use crate::types::assessment::AssessmentResult;
use crate::types::question::{find_question, Question, QUESTIONS};
use tracing::{debug, info};

/// Front-end state for one questionnaire run. Every transition returns a
/// new value; the scoring core never sees a partial answer set.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    questions: &'static [Question],
    answers: AnswerSet,
    result: Option<AssessmentResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            questions: &QUESTIONS,
            answers: AnswerSet::new(),
            result: None,
        }
    }

    pub fn from_answers(answers: AnswerSet) -> Result<Self> {
        if let Some((unknown, _)) = answers.iter().find(|(id, _)| find_question(id).is_none()) {
            return Err(BurnoutError::UnknownQuestion(unknown.to_string()));
        }
        Ok(Self {
            answers,
            ..Self::new()
        })
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn answer(&self, question_id: &str, value: i64) -> Result<Self> {
        if find_question(question_id).is_none() {
            return Err(BurnoutError::UnknownQuestion(question_id.to_string()));
        }
        Ok(Self {
            questions: self.questions,
            answers: self.answers.with_answer(question_id, value)?,
            result: None,
        })
    }

    pub fn missing(&self) -> Vec<&'static str> {
        self.questions
            .iter()
            .filter(|question| self.answers.get(question.id).is_none())
            .map(|question| question.id)
            .collect()
    }

    pub fn submit(&self) -> Result<Self> {
        let missing = self.missing();
        if !missing.is_empty() {
            debug!(missing = missing.len(), "submission rejected");
            return Err(BurnoutError::IncompleteSubmission {
                missing: missing.into_iter().map(str::to_string).collect(),
            });
        }
        let result = scoring::score(&self.answers, self.questions)?;
        info!(risk = result.risk.label(), "assessment submitted");
        Ok(Self {
            questions: self.questions,
            answers: self.answers.clone(),
            result: Some(result),
        })
    }

    pub fn reset(&self) -> Self {
        Self::new()
    }
}
