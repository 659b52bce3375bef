use serde::Serialize;

use crate::Result;
use crate::lib::config::Mode;
use crate::lib::model::Recommendation;

/// Top-level output structure containing metadata and recommendations
#[derive(Debug, Clone, Serialize)]
pub struct RecommenderOutput {
    pub metadata: OutputMetadata,
    pub recommendations: Vec<Recommendation>,
}

/// Metadata about the analysis run
#[derive(Debug, Clone, Serialize)]
pub struct OutputMetadata {
    pub timestamp: String,
    pub mode: Mode,
    pub metric_hours: u32,
    pub cost_days: u32,
    pub total_instances: usize,
    pub total_recommendations: usize,
}

impl RecommenderOutput {
    /// Create a new RecommenderOutput
    pub fn new(
        mode: Mode,
        metric_hours: u32,
        cost_days: u32,
        total_instances: usize,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        let total_recommendations = recommendations.len();

        Self {
            metadata: OutputMetadata {
                timestamp: chrono::Utc::now().to_rfc3339(),
                mode,
                metric_hours,
                cost_days,
                total_instances,
                total_recommendations,
            },
            recommendations,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_counts_recommendations() {
        let output = RecommenderOutput::new(Mode::Mock, 24, 30, 3, Vec::new());
        let json = output.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["mode"], "mock");
        assert_eq!(value["metadata"]["metric_hours"], 24);
        assert_eq!(value["metadata"]["total_instances"], 3);
        assert_eq!(value["metadata"]["total_recommendations"], 0);
        assert!(value["recommendations"].as_array().unwrap().is_empty());
        let timestamp = value["metadata"]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
