use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Sleep,
    Motivation,
    Workload,
    Emotion,
}

impl Dimension {
    /// Order used when emitting advice and listing areas to watch.
    pub const ADVICE_ORDER: [Dimension; 4] = [
        Dimension::Sleep,
        Dimension::Workload,
        Dimension::Motivation,
        Dimension::Emotion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Sleep => "sleep",
            Dimension::Motivation => "motivation",
            Dimension::Workload => "workload",
            Dimension::Emotion => "emotion",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            Dimension::Sleep => "Sleep",
            Dimension::Motivation => "Motivation / Meaning",
            Dimension::Workload => "Workload / Focus",
            Dimension::Emotion => "Emotions / Cynicism",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub dimension: Dimension,
    pub reverse: bool,
}

impl Question {
    /// Effective value on the "5 = most burned out" scale.
    pub fn effective_value(&self, raw: u8) -> u8 {
        if self.reverse {
            6 - raw
        } else {
            raw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseOption {
    pub value: u8,
    pub label: &'static str,
}

pub const MIN_RESPONSE: u8 = 1;
pub const MAX_RESPONSE: u8 = 5;

pub static OPTIONS: [ResponseOption; 5] = [
    ResponseOption { value: 1, label: "Never" },
    ResponseOption { value: 2, label: "Rarely" },
    ResponseOption { value: 3, label: "Sometimes" },
    ResponseOption { value: 4, label: "Often" },
    ResponseOption { value: 5, label: "Always" },
];

pub static QUESTIONS: [Question; 10] = [
    Question {
        id: "sleep_quality",
        text: "I sleep well and wake up feeling rested.",
        dimension: Dimension::Sleep,
        reverse: true,
    },
    Question {
        id: "sleep_problems",
        text: "Recently, I have trouble falling asleep or staying asleep because of work or study.",
        dimension: Dimension::Sleep,
        reverse: false,
    },
    Question {
        id: "motivation_drop",
        text: "I feel less motivated to work or study than I used to.",
        dimension: Dimension::Motivation,
        reverse: false,
    },
    Question {
        id: "dread_mornings",
        text: "I often feel a sense of dread when I think about the upcoming work/study day.",
        dimension: Dimension::Emotion,
        reverse: false,
    },
    Question {
        id: "cynicism",
        text: "I feel more negative or cynical about my work or studies.",
        dimension: Dimension::Emotion,
        reverse: false,
    },
    Question {
        id: "concentration",
        text: "I find it hard to concentrate or make decisions.",
        dimension: Dimension::Workload,
        reverse: false,
    },
    Question {
        id: "overwhelmed",
        text: "I feel overwhelmed by the amount of work I have.",
        dimension: Dimension::Workload,
        reverse: false,
    },
    Question {
        id: "exhaustion_end_of_day",
        text: "At the end of the day, I feel completely emotionally and physically exhausted.",
        dimension: Dimension::Emotion,
        reverse: false,
    },
    Question {
        id: "enjoyment",
        text: "I still enjoy parts of my work/study and find them meaningful.",
        dimension: Dimension::Motivation,
        reverse: true,
    },
    Question {
        id: "detachment",
        text: "I feel detached from the people I work or study with (e.g., classmates, colleagues).",
        dimension: Dimension::Emotion,
        reverse: false,
    },
];

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}

/// Accepts a numeric response or a scale label such as "often".
pub fn parse_response(input: &str) -> Option<u8> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<u8>() {
        return (MIN_RESPONSE..=MAX_RESPONSE)
            .contains(&value)
            .then_some(value);
    }
    OPTIONS
        .iter()
        .find(|option| option.label.eq_ignore_ascii_case(trimmed))
        .map(|option| option.value)
}
