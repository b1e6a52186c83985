use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted resume record. Only raw/enhanced text and top-level fields
/// are stored — the structured record is re-derived at render time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: Option<String>,
    pub original_content: String,
    pub enhanced_content: String,
    pub template_id: Option<String>,
    pub mode: String,
    pub job_description_used: Option<String>,
    pub file_path_pdf: Option<String>,
    pub file_path_docx: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// The two rewrite behavior flags, passed opaquely to the rewriting service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizationMode {
    /// Improve phrasing using only the provided facts.
    #[default]
    #[serde(rename = "no_hallucinations")]
    Strict,
    /// Infer industry-standard skills and achievements for the job title.
    #[serde(rename = "power_boost")]
    Boosted,
}

impl OptimizationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::Strict => "no_hallucinations",
            OptimizationMode::Boosted => "power_boost",
        }
    }

    /// Sampling temperature sent to the rewriting service.
    pub fn temperature(&self) -> f32 {
        match self {
            OptimizationMode::Strict => 0.2,
            OptimizationMode::Boosted => 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_values() {
        assert_eq!(
            serde_json::to_string(&OptimizationMode::Strict).unwrap(),
            "\"no_hallucinations\""
        );
        let mode: OptimizationMode = serde_json::from_str("\"power_boost\"").unwrap();
        assert_eq!(mode, OptimizationMode::Boosted);
    }

    #[test]
    fn test_mode_temperatures() {
        assert!(OptimizationMode::Strict.temperature() < OptimizationMode::Boosted.temperature());
    }
}
