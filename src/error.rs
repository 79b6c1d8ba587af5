use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurnoutError {
    #[error(
        "Please answer all questions before viewing your result (missing: {})",
        .missing.join(", ")
    )]
    IncompleteSubmission { missing: Vec<String> },

    #[error("missing answer for question: {0}")]
    MissingAnswer(String),

    #[error("answer for {question_id} must be between 1 and 5 (got {value})")]
    InvalidAnswer { question_id: String, value: i64 },

    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("malformed answer '{0}': expected ID=VALUE")]
    MalformedAnswer(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BurnoutError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::IncompleteSubmission { .. } => crate::exit_code::INCOMPLETE,
            Self::InvalidAnswer { .. } | Self::UnknownQuestion(_) | Self::MalformedAnswer(_) => {
                crate::exit_code::INVALID_INPUT
            }
            _ => crate::exit_code::RUNTIME_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, BurnoutError>;
