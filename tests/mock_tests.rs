//! Fixture-backed provider tests

use rightsizer::{
    Action, CostProvider, InstanceSource, InstanceState, MetricsProvider, MockCostProvider,
    MockInstanceSource, MockMetricsProvider, OptimiserError, analyse_instances,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn fixture_dir(instances: &str, metrics: &str, costs: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("instances.json"), instances).unwrap();
    fs::write(dir.path().join("metrics.json"), metrics).unwrap();
    fs::write(dir.path().join("costs.json"), costs).unwrap();
    dir
}

const INSTANCES: &str = r#"[
    {"id": "i-1", "instance_type": "t3.medium", "state": "running", "tags": {"Name": "web"}},
    {"id": "i-2", "instance_type": "m5.large", "state": "stopped"},
    {"id": "i-3", "instance_type": "t3.micro", "state": "terminated"}
]"#;

const METRICS: &str = r#"{"i-1": [10, 12, 8, 15, 9]}"#;

const COSTS: &str = r#"{
    "i-1": {"instance_id": "i-1", "monthly_cost": 30.0, "hourly_cost": 0.0416}
}"#;

#[tokio::test]
async fn test_lists_fixture_instances() {
    let dir = fixture_dir(INSTANCES, METRICS, COSTS);
    let source = MockInstanceSource::new(dir.path());

    let instances = source.list_instances().await.unwrap();
    assert_eq!(instances.len(), 3);
    assert_eq!(instances[0].tags.get("Name").map(String::as_str), Some("web"));
    assert_eq!(instances[1].state, InstanceState::Stopped);
    assert!(source.is_mock());
}

#[tokio::test]
async fn test_missing_instance_fixture_is_a_discovery_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MockInstanceSource::new(dir.path())
        .list_instances()
        .await
        .unwrap_err();
    assert!(matches!(err, OptimiserError::Discovery(_)), "err: {err}");
}

#[tokio::test]
async fn test_unknown_ids_get_empty_samples_and_zero_cost() {
    let dir = fixture_dir(INSTANCES, METRICS, COSTS);

    let series = MockMetricsProvider::new(dir.path())
        .get_cpu_utilisation("i-404", 24)
        .await
        .unwrap();
    assert_eq!(series.instance_id, "i-404");
    assert!(series.samples.is_empty());

    let cost = MockCostProvider::new(dir.path())
        .get_instance_cost("i-404", 30)
        .await
        .unwrap();
    assert_eq!(cost.instance_id, "i-404");
    assert_eq!(cost.monthly_cost, 0.0);
    assert_eq!(cost.hourly_cost, 0.0);
}

#[tokio::test]
async fn test_invalid_metrics_fixture_is_a_metrics_error() {
    let dir = fixture_dir(INSTANCES, "{ not json", COSTS);
    let err = MockMetricsProvider::new(dir.path())
        .get_cpu_utilisation("i-1", 24)
        .await
        .unwrap_err();
    assert!(matches!(err, OptimiserError::Metrics(_)), "err: {err}");
}

#[tokio::test]
async fn test_analysis_over_fixtures() {
    let dir = fixture_dir(INSTANCES, METRICS, COSTS);
    let path: &Path = dir.path();

    let instances = MockInstanceSource::new(path).list_instances().await.unwrap();
    let recs = analyse_instances(
        &instances,
        &MockMetricsProvider::new(path),
        &MockCostProvider::new(path),
        24,
        30,
    )
    .await
    .unwrap();

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].action, Action::Downsize);
    assert_eq!(recs[0].suggested_type, "t3.small");
    assert!((recs[0].estimated_saving - 9.0).abs() < 1e-9);
    assert_eq!(recs[1].action, Action::Review);
}

#[tokio::test]
async fn test_broken_metrics_fixture_degrades_every_instance() {
    let dir = fixture_dir(INSTANCES, "[]", "{ not json");
    let path: &Path = dir.path();

    let instances = MockInstanceSource::new(path).list_instances().await.unwrap();
    let recs = analyse_instances(
        &instances,
        &MockMetricsProvider::new(path),
        &MockCostProvider::new(path),
        24,
        30,
    )
    .await
    .unwrap();

    assert_eq!(recs.len(), 2);
    for rec in &recs {
        assert_eq!(rec.action, Action::Unknown);
        assert!(rec.reason.contains("Failed to parse metrics"), "reason: {}", rec.reason);
    }
}
