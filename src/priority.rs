use serde::{Deserialize, Serialize};

/// Boolean situational flags attached to a report at submission time.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ContextFlags {
    #[serde(default)]
    pub near_school: bool,
    #[serde(default)]
    pub near_hospital: bool,
    #[serde(default)]
    pub high_density_area: bool,
    #[serde(default)]
    pub peak_hour: bool,
    #[serde(default)]
    pub public_danger: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriorityLabel {
    Critical,
    High,
    Normal,
}

impl PriorityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::Critical => "Critical",
            PriorityLabel::High => "High",
            PriorityLabel::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PriorityOutcome {
    pub score: i32,
    pub label: PriorityLabel,
}

pub const MODEL_VERSION: &str = "v1";

pub fn context_score(flags: &ContextFlags) -> i32 {
    let mut score = 0;

    if flags.public_danger {
        score += 40;
    }
    if flags.near_hospital {
        score += 30;
    }
    if flags.near_school {
        score += 20;
    }
    if flags.high_density_area {
        score += 15;
    }
    if flags.peak_hour {
        score += 10;
    }

    score
}

pub fn label_for(score: i32) -> PriorityLabel {
    if score >= 70 {
        PriorityLabel::Critical
    } else if score >= 40 {
        PriorityLabel::High
    } else {
        PriorityLabel::Normal
    }
}

pub fn evaluate(flags: &ContextFlags) -> PriorityOutcome {
    let score = context_score(flags);
    PriorityOutcome {
        score,
        label: label_for(score),
    }
}
