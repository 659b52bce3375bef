use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A compute instance as returned by discovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub instance_type: String,
    pub state: InstanceState,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Instance {
    pub fn new(
        id: impl Into<String>,
        instance_type: impl Into<String>,
        state: InstanceState,
    ) -> Self {
        Self {
            id: id.into(),
            instance_type: instance_type.into(),
            state,
            tags: HashMap::new(),
        }
    }
}

/// Lifecycle state of an instance
///
/// Serialized as the plain provider string, so states this tool does not
/// care about (`pending`, `stopping`, ...) survive a round trip as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstanceState {
    Running,
    Stopped,
    Terminated,
    Other(String),
}

impl InstanceState {
    pub fn as_str(&self) -> &str {
        match self {
            InstanceState::Running => "running",
            InstanceState::Stopped => "stopped",
            InstanceState::Terminated => "terminated",
            InstanceState::Other(s) => s,
        }
    }
}

impl From<String> for InstanceState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "running" => InstanceState::Running,
            "stopped" => InstanceState::Stopped,
            "terminated" => InstanceState::Terminated,
            _ => InstanceState::Other(s),
        }
    }
}

impl From<&str> for InstanceState {
    fn from(s: &str) -> Self {
        InstanceState::from(s.to_string())
    }
}

impl From<InstanceState> for String {
    fn from(state: InstanceState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPU utilisation samples (percent, 0-100) for one instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuSampleSeries {
    pub instance_id: String,
    pub samples: Vec<f64>,
}

/// Cost figures for one instance over the cost window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostData {
    pub instance_id: String,
    pub monthly_cost: f64,
    pub hourly_cost: f64,
}

impl CostData {
    /// Cost record used when no cost figure is known
    pub fn zero(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            monthly_cost: 0.0,
            hourly_cost: 0.0,
        }
    }
}

/// Rightsizing verdict for an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "Review / Potentially Stop")]
    Review,
    #[serde(rename = "Downsize")]
    Downsize,
    #[serde(rename = "Upsize / Scale out")]
    Upsize,
    #[serde(rename = "Keep as-is")]
    Keep,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Unknown => "Unknown",
            Action::Review => "Review / Potentially Stop",
            Action::Downsize => "Downsize",
            Action::Upsize => "Upsize / Scale out",
            Action::Keep => "Keep as-is",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recommendation for a single instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub instance_id: String,
    pub instance_type: String,
    pub state: InstanceState,
    pub avg_cpu: f64,
    pub peak_cpu: f64,
    pub monthly_cost: f64,
    pub hourly_cost: f64,
    pub action: Action,
    /// Empty unless the action is `Downsize` or `Upsize`
    pub suggested_type: String,
    /// Per month, zero unless downsizing with a known cost
    pub estimated_saving: f64,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_keeps_unrecognised_values() {
        let state: InstanceState = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(state, InstanceState::Other("pending".to_string()));
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"pending\"");

        let state: InstanceState = serde_json::from_str("\"terminated\"").unwrap();
        assert_eq!(state, InstanceState::Terminated);
    }

    #[test]
    fn action_serializes_to_display_text() {
        for action in [
            Action::Unknown,
            Action::Review,
            Action::Downsize,
            Action::Upsize,
            Action::Keep,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action));
        }
    }

    #[test]
    fn instance_tags_are_optional() {
        let inst: Instance = serde_json::from_str(
            r#"{"id": "i-1", "instance_type": "t3.micro", "state": "running"}"#,
        )
        .unwrap();
        assert!(inst.tags.is_empty());
        assert_eq!(inst.state, InstanceState::Running);
    }

    #[test]
    fn recommendation_uses_snake_case_field_names() {
        let rec = Recommendation {
            instance_id: "i-1".to_string(),
            instance_type: "t3.small".to_string(),
            state: InstanceState::Running,
            avg_cpu: 10.0,
            peak_cpu: 20.0,
            monthly_cost: 100.0,
            hourly_cost: 0.14,
            action: Action::Downsize,
            suggested_type: "t3.micro".to_string(),
            estimated_saving: 30.0,
            reason: "low".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        for key in [
            "instance_id",
            "instance_type",
            "state",
            "avg_cpu",
            "peak_cpu",
            "monthly_cost",
            "hourly_cost",
            "action",
            "suggested_type",
            "estimated_saving",
            "reason",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(value["state"], "running");
        assert_eq!(value["action"], "Downsize");
    }
}
