use super::RenderOptions;
use crate::types::assessment::{to_percent, AssessmentResult};
use crate::types::question::{Dimension, Question, OPTIONS};

const BAR_WIDTH: usize = 20;

pub fn progress_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

pub fn to_text(result: &AssessmentResult, options: RenderOptions) -> String {
    let percentage = result.percentage();
    let mut output = String::new();
    output.push_str("Your Burnout Risk\n\n");
    output.push_str(&format!("{} Low / Medium / High\n", progress_bar(percentage)));
    output.push_str(&format!(
        "Score: {}% – {}\n\n",
        percentage,
        result.risk.label()
    ));
    output.push_str(result.risk.description());
    output.push_str("\n\n");

    if options.show_dimensions {
        output.push_str("Areas to watch\n");
        for dimension in Dimension::ADVICE_ORDER {
            output.push_str(&format!(
                "  {}: {}% risk\n",
                dimension.display_label(),
                to_percent(result.dimension_scores.get(dimension))
            ));
        }
        output.push('\n');
    }

    output.push_str("Personalized Tips\n");
    for line in &result.advice {
        output.push_str(&format!("  {line}\n"));
    }
    output
}

pub fn scale_legend() -> String {
    OPTIONS
        .iter()
        .map(|option| format!("{}={}", option.value, option.label))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn catalog_to_text(questions: &[Question]) -> String {
    let mut output = String::new();
    output.push_str("Burnout Self-Assessment\n");
    output.push_str(&format!("Scale: {}\n\n", scale_legend()));
    for (index, question) in questions.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {} [{}]\n    {}\n",
            index + 1,
            question.id,
            question.dimension,
            question.text
        ));
    }
    output
}
