//! Capability interfaces for the data the analyser consumes.
//!
//! The analyser is agnostic to what backs these: fixture files, a live
//! provider, or a test double.

use std::future::Future;

use crate::Result;
use crate::lib::model::{CostData, CpuSampleSeries, Instance};

/// Lists the instances to analyse
pub trait InstanceSource {
    fn list_instances(&self) -> impl Future<Output = Result<Vec<Instance>>> + Send;

    fn is_mock(&self) -> bool {
        false
    }
}

/// Supplies CPU utilisation samples for an instance
pub trait MetricsProvider {
    fn get_cpu_utilisation(
        &self,
        instance_id: &str,
        window_hours: u32,
    ) -> impl Future<Output = Result<CpuSampleSeries>> + Send;

    fn is_mock(&self) -> bool {
        false
    }
}

/// Supplies cost figures for an instance
pub trait CostProvider {
    fn get_instance_cost(
        &self,
        instance_id: &str,
        window_days: u32,
    ) -> impl Future<Output = Result<CostData>> + Send;

    fn is_mock(&self) -> bool {
        false
    }
}
