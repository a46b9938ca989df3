use serde::{Deserialize, Serialize};

/// One job posting as produced by a job source. Identity is positional —
/// records carry no durable key and live only for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub apply_url: Option<String>,
}

/// A job record annotated with its similarity to the résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobRecord,
    pub similarity: f64,
}

/// Terminal per-job outcome of a submission attempt. `NotApplied` is the
/// initial state; every record leaving the orchestrator carries one of the
/// other four.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    NotApplied,
    Applied,
    Failed,
    NoApplyLink,
    Error(String),
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::NotApplied => write!(f, "Not Applied"),
            ApplicationStatus::Applied => write!(f, "Applied"),
            ApplicationStatus::Failed => write!(f, "Failed"),
            ApplicationStatus::NoApplyLink => write!(f, "No Apply Link"),
            ApplicationStatus::Error(detail) => write!(f, "Error: {detail}"),
        }
    }
}

/// A ranked job annotated with its submission outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedJob {
    #[serde(flatten)]
    pub ranked: RankedJob,
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_report_wording() {
        assert_eq!(ApplicationStatus::Applied.to_string(), "Applied");
        assert_eq!(ApplicationStatus::NoApplyLink.to_string(), "No Apply Link");
        assert_eq!(
            ApplicationStatus::Error("timed out".to_string()).to_string(),
            "Error: timed out"
        );
    }

    #[test]
    fn test_status_serializes_as_snake_case() {
        let applied = serde_json::to_value(ApplicationStatus::Applied).unwrap();
        assert_eq!(applied, serde_json::json!("applied"));

        let error = serde_json::to_value(ApplicationStatus::Error("boom".to_string())).unwrap();
        assert_eq!(error, serde_json::json!({"error": "boom"}));
    }

    #[test]
    fn test_ranked_job_flattens_record_fields() {
        let ranked = RankedJob {
            job: JobRecord {
                title: "Nurse".to_string(),
                company: "Clinic".to_string(),
                location: "Boston".to_string(),
                description: "patient care".to_string(),
                apply_url: None,
            },
            similarity: 0.42,
        };
        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["title"], "Nurse");
        assert_eq!(value["similarity"], 0.42);
    }

    #[test]
    fn test_job_record_tolerates_missing_optional_fields() {
        let record: JobRecord = serde_json::from_str(
            r#"{"title": "Dev", "company": "Acme", "location": "Austin"}"#,
        )
        .unwrap();
        assert!(record.description.is_empty());
        assert!(record.apply_url.is_none());
    }
}
