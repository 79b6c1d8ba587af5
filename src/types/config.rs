use crate::error::BurnoutError;
use serde::Deserialize;

pub const SUPPORTED_FORMATS: [&str; 3] = ["text", "md", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BurnoutConfig {
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    #[serde(default = "default_show_dimensions")]
    pub show_dimensions: bool,
}

fn default_show_dimensions() -> bool {
    true
}

impl BurnoutConfig {
    pub fn report_format(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
            .unwrap_or("text")
    }

    pub fn show_dimensions(&self) -> bool {
        self.report
            .as_ref()
            .map(|report| report.show_dimensions)
            .unwrap_or(true)
    }

    pub fn validate(&self) -> Result<(), BurnoutError> {
        let format = self.report_format();
        if !SUPPORTED_FORMATS.contains(&format) {
            return Err(BurnoutError::ConfigParse(format!(
                "unsupported report.format: {format} (expected one of {})",
                SUPPORTED_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
