use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::priority::ContextFlags;

/// A single citizen-submitted civic issue record.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: i64,
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub current_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContextSignal {
    pub id: i64,
    pub report_id: i64,
    pub near_school: bool,
    pub near_hospital: bool,
    pub high_density_area: bool,
    pub peak_hour: bool,
    pub public_danger: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityEvaluation {
    pub id: i64,
    pub report_id: i64,
    pub nlp_score: Option<f64>,
    pub context_score: f64,
    pub total_score: f64,
    pub priority_label: String,
    pub model_version: String,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutingLog {
    pub id: i64,
    pub report_id: i64,
    pub department_id: i64,
    pub routed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusHistory {
    pub id: i64,
    pub report_id: i64,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

/// Fields a citizen supplies when submitting a report. Context flags default
/// to false when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub flags: ContextFlags,
}

impl NewReport {
    /// Checked before any persistence is attempted. Latitude and longitude
    /// are accepted without range checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyDescription,
    EmptyCategory,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyDescription => write!(f, "description must not be empty"),
            ValidationError::EmptyCategory => write!(f, "category must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// What the caller gets back after a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub report_id: i64,
    pub priority: String,
    pub score: i32,
}

/// Listing row: a report joined with its priority evaluation. The evaluation
/// fields are nullable so a report missing its evaluation still lists.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub id: i64,
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub current_status: String,
    pub priority_label: Option<String>,
    pub total_score: Option<f64>,
}

/// One report with everything hanging off it.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDetail {
    pub report: Report,
    pub context: Option<ContextSignal>,
    pub priority: Option<PriorityEvaluation>,
    pub routing_logs: Vec<RoutingLog>,
    pub status_history: Vec<StatusHistory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submission() -> NewReport {
        NewReport {
            description: "Broken streetlight on 5th Avenue".to_string(),
            category: "infrastructure".to_string(),
            latitude: 40.7128,
            longitude: -74.006,
            flags: ContextFlags::default(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(sample_submission().validate().is_ok());
    }

    #[test]
    fn blank_description_is_rejected() {
        let mut report = sample_submission();
        report.description = "   ".to_string();
        assert_eq!(report.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn blank_category_is_rejected() {
        let mut report = sample_submission();
        report.category = String::new();
        assert_eq!(report.validate(), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn summary_rows_list_even_without_an_evaluation() {
        let summary = ReportSummary {
            id: 7,
            description: "Collapsed drain cover".to_string(),
            category: "roads".to_string(),
            latitude: 19.07,
            longitude: 72.87,
            created_at: Utc::now(),
            current_status: "Pending".to_string(),
            priority_label: None,
            total_score: None,
        };

        let payload = serde_json::to_value(&summary).expect("summary serializes");
        assert_eq!(payload["id"], 7);
        assert_eq!(payload["priority_label"], serde_json::Value::Null);
        assert_eq!(payload["total_score"], serde_json::Value::Null);
    }

    #[test]
    fn flags_default_false_when_omitted_from_json() {
        let report: NewReport = serde_json::from_str(
            r#"{
                "description": "Pothole near the market",
                "category": "roads",
                "latitude": 12.97,
                "longitude": 77.59,
                "public_danger": true
            }"#,
        )
        .expect("submission deserializes");

        assert!(report.flags.public_danger);
        assert!(!report.flags.near_school);
        assert!(!report.flags.near_hospital);
        assert!(!report.flags.high_density_area);
        assert!(!report.flags.peak_hour);
    }
}
