pub mod json;
pub mod md;
pub mod text;

use crate::error::{BurnoutError, Result};
use crate::types::assessment::AssessmentResult;
use crate::types::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "text" => Ok(Self::Text),
            "md" => Ok(Self::Md),
            "json" => Ok(Self::Json),
            other => Err(BurnoutError::ConfigParse(format!(
                "unsupported report format: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_dimensions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_dimensions: true,
        }
    }
}

pub fn render(
    result: &AssessmentResult,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::to_text(result, options)),
        OutputFormat::Md => Ok(md::to_markdown(result, options)),
        OutputFormat::Json => json::to_json(result).map_err(BurnoutError::Json),
    }
}

pub fn render_catalog(questions: &[Question], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::catalog_to_text(questions)),
        OutputFormat::Md => Ok(md::catalog_to_markdown(questions)),
        OutputFormat::Json => json::catalog_to_json(questions).map_err(BurnoutError::Json),
    }
}
