use super::RenderOptions;
use crate::types::assessment::{to_percent, AssessmentResult};
use crate::types::question::{Dimension, Question, OPTIONS};

pub fn to_markdown(result: &AssessmentResult, options: RenderOptions) -> String {
    let mut output = String::new();
    output.push_str("# Your Burnout Risk\n\n");
    output.push_str(&format!(
        "Score: **{}%** – {} (`{}`)\n\n",
        result.percentage(),
        result.risk.label(),
        result.risk.color()
    ));
    output.push_str(&format!("{}\n\n", result.risk.description()));

    if options.show_dimensions {
        output.push_str("## Areas to watch\n\n");
        for dimension in Dimension::ADVICE_ORDER {
            output.push_str(&format!(
                "- **{}:** {}% risk\n",
                dimension.display_label(),
                to_percent(result.dimension_scores.get(dimension))
            ));
        }
        output.push('\n');
    }

    output.push_str("## Personalized Tips\n\n");
    for line in &result.advice {
        output.push_str(&format!("{line}\n\n"));
    }
    output
}

pub fn catalog_to_markdown(questions: &[Question]) -> String {
    let mut output = String::new();
    output.push_str("# Burnout Self-Assessment\n\n");
    output.push_str("| # | id | dimension | reverse | question |\n");
    output.push_str("|---|----|-----------|---------|----------|\n");
    for (index, question) in questions.iter().enumerate() {
        output.push_str(&format!(
            "| {} | `{}` | {} | {} | {} |\n",
            index + 1,
            question.id,
            question.dimension,
            if question.reverse { "yes" } else { "no" },
            question.text
        ));
    }
    output.push_str("\n## Scale\n\n");
    for option in &OPTIONS {
        output.push_str(&format!("- {}: {}\n", option.value, option.label));
    }
    output
}
