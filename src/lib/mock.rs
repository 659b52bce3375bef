//! Fixture-backed providers for mock mode.
//!
//! Each provider reads its JSON file from the fixture directory on every
//! call, so an unreadable fixture surfaces as a fetch error for that call.

use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::lib::error::{CostError, DiscoveryError, MetricsError};
use crate::lib::model::{CostData, CpuSampleSeries, Instance};
use crate::lib::providers::{CostProvider, InstanceSource, MetricsProvider};

pub const INSTANCES_FILE: &str = "instances.json";
pub const METRICS_FILE: &str = "metrics.json";
pub const COSTS_FILE: &str = "costs.json";

/// Instance discovery from `instances.json`
#[derive(Debug, Clone)]
pub struct MockInstanceSource {
    path: PathBuf,
}

impl MockInstanceSource {
    pub fn new(fixture_dir: impl AsRef<Path>) -> Self {
        Self {
            path: fixture_dir.as_ref().join(INSTANCES_FILE),
        }
    }
}

impl InstanceSource for MockInstanceSource {
    async fn list_instances(&self) -> Result<Vec<Instance>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DiscoveryError::FixtureUnreadable(format!("{}: {}", self.path.display(), e))
        })?;

        let instances: Vec<Instance> = serde_json::from_str(&content).map_err(|e| {
            DiscoveryError::InvalidFixture(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(
            "Loaded {} instances from {}",
            instances.len(),
            self.path.display()
        );
        Ok(instances)
    }

    fn is_mock(&self) -> bool {
        true
    }
}

/// CPU samples from `metrics.json`, keyed by instance id
#[derive(Debug, Clone)]
pub struct MockMetricsProvider {
    path: PathBuf,
}

impl MockMetricsProvider {
    pub fn new(fixture_dir: impl AsRef<Path>) -> Self {
        Self {
            path: fixture_dir.as_ref().join(METRICS_FILE),
        }
    }
}

impl MetricsProvider for MockMetricsProvider {
    async fn get_cpu_utilisation(
        &self,
        instance_id: &str,
        window_hours: u32,
    ) -> Result<CpuSampleSeries> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            MetricsError::FixtureUnreadable(format!("{}: {}", self.path.display(), e))
        })?;

        let mut data: HashMap<String, Vec<f64>> = serde_json::from_str(&content).map_err(|e| {
            MetricsError::InvalidFixture(format!("{}: {}", self.path.display(), e))
        })?;

        // Fixtures carry no timestamps, so the window is not applied.
        let samples = data.remove(instance_id).unwrap_or_default();
        debug!(
            "Loaded {} CPU samples for {} (window {}h)",
            samples.len(),
            instance_id,
            window_hours
        );

        Ok(CpuSampleSeries {
            instance_id: instance_id.to_string(),
            samples,
        })
    }

    fn is_mock(&self) -> bool {
        true
    }
}

/// Cost figures from `costs.json`, keyed by instance id
#[derive(Debug, Clone)]
pub struct MockCostProvider {
    path: PathBuf,
}

impl MockCostProvider {
    pub fn new(fixture_dir: impl AsRef<Path>) -> Self {
        Self {
            path: fixture_dir.as_ref().join(COSTS_FILE),
        }
    }
}

impl CostProvider for MockCostProvider {
    async fn get_instance_cost(&self, instance_id: &str, _window_days: u32) -> Result<CostData> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CostError::FixtureUnreadable(format!("{}: {}", self.path.display(), e))
        })?;

        let mut data: HashMap<String, CostData> = serde_json::from_str(&content)
            .map_err(|e| CostError::InvalidFixture(format!("{}: {}", self.path.display(), e)))?;

        Ok(data
            .remove(instance_id)
            .unwrap_or_else(|| CostData::zero(instance_id)))
    }

    fn is_mock(&self) -> bool {
        true
    }
}
