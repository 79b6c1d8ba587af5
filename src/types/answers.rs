use crate::error::{BurnoutError, Result};
use crate::types::question::{MAX_RESPONSE, MIN_RESPONSE};
use std::collections::BTreeMap;
use std::path::Path;

/// Responses keyed by question id. Every stored value is within 1..=5;
/// completeness against a catalog is checked by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: BTreeMap<String, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.values.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.values.iter().map(|(id, value)| (id.as_str(), *value))
    }

    /// Returns a copy with `question_id` set to `value`, overwriting any
    /// previous answer.
    pub fn with_answer(&self, question_id: &str, value: i64) -> Result<Self> {
        let mut next = self.clone();
        next.values
            .insert(question_id.to_string(), checked_value(question_id, value)?);
        Ok(next)
    }

    /// Folds `other` into a copy of `self`; entries in `other` win.
    pub fn merged(&self, other: &AnswerSet) -> Self {
        let mut next = self.clone();
        next.values
            .extend(other.values.iter().map(|(id, value)| (id.clone(), *value)));
        next
    }
}

fn checked_value(question_id: &str, value: i64) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|value| (MIN_RESPONSE..=MAX_RESPONSE).contains(value))
        .ok_or_else(|| BurnoutError::InvalidAnswer {
            question_id: question_id.to_string(),
            value,
        })
}

impl TryFrom<BTreeMap<String, i64>> for AnswerSet {
    type Error = BurnoutError;

    fn try_from(raw: BTreeMap<String, i64>) -> Result<Self> {
        let values = raw
            .into_iter()
            .map(|(id, value)| checked_value(&id, value).map(|value| (id, value)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { values })
    }
}

/// Parses a single `ID=VALUE` pair as given on the command line.
pub fn parse_pair(input: &str) -> Result<(String, i64)> {
    let (id, value) = input
        .split_once('=')
        .ok_or_else(|| BurnoutError::MalformedAnswer(input.to_string()))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(BurnoutError::MalformedAnswer(input.to_string()));
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|_| BurnoutError::MalformedAnswer(input.to_string()))?;
    Ok((id.to_string(), value))
}

/// Reads `{ id = value }` pairs from a `.toml` file, or JSON otherwise.
/// Syntax errors surface as `Toml`/`Json`; a value that is not a whole
/// number is a `MalformedAnswer`.
pub fn read_answers_file(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("toml"));
    let raw = if is_toml {
        toml::from_str::<BTreeMap<String, toml::Value>>(&content)?
            .into_iter()
            .map(|(id, value)| integer_entry(id, value.as_integer(), || value.to_string()))
            .collect::<Result<BTreeMap<_, _>>>()?
    } else {
        serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&content)?
            .into_iter()
            .map(|(id, value)| integer_entry(id, value.as_i64(), || value.to_string()))
            .collect::<Result<BTreeMap<_, _>>>()?
    };
    AnswerSet::try_from(raw)
}

fn integer_entry(
    id: String,
    value: Option<i64>,
    shown: impl FnOnce() -> String,
) -> Result<(String, i64)> {
    match value {
        Some(value) => Ok((id, value)),
        None => Err(BurnoutError::MalformedAnswer(format!("{id}={}", shown()))),
    }
}
