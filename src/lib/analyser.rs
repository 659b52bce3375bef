use log::{debug, info, warn};

use crate::Result;
use crate::lib::catalog::{downsize_type, upsize_type};
use crate::lib::model::{Action, CostData, Instance, InstanceState, Recommendation};
use crate::lib::providers::{CostProvider, MetricsProvider};
use crate::lib::stats::{average, fraction_below, peak};

/// Decision thresholds for the rightsizing rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Average CPU (%) below which an instance is underutilised
    pub low_avg_cpu: f64,
    /// Peak CPU (%) that must also stay below this for a downsize
    pub low_peak_cpu: f64,
    /// Average CPU (%) above which an instance is heavily utilised
    pub high_avg_cpu: f64,
    /// Samples below this CPU (%) count as idle
    pub idle_cpu: f64,
    /// Share of the monthly cost assumed saved by a downsize
    pub downsize_saving_ratio: f64,
}

impl Thresholds {
    pub const DEFAULT: Thresholds = Thresholds {
        low_avg_cpu: 20.0,
        low_peak_cpu: 40.0,
        high_avg_cpu: 75.0,
        idle_cpu: 5.0,
        // Flat estimate, not derived from the price of the suggested type.
        downsize_saving_ratio: 0.3,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Produces one recommendation per non-terminated instance
#[derive(Debug, Clone, Default)]
pub struct Analyser {
    thresholds: Thresholds,
}

impl Analyser {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Fetch metrics and costs for each instance and classify it
    ///
    /// Instances are processed sequentially in input order. A metrics fetch
    /// failure yields an `Unknown` recommendation; a cost fetch failure is
    /// treated as zero cost. Neither aborts the batch.
    pub async fn analyse_instances<M, C>(
        &self,
        instances: &[Instance],
        metrics: &M,
        costs: &C,
        metric_hours: u32,
        cost_days: u32,
    ) -> Result<Vec<Recommendation>>
    where
        M: MetricsProvider,
        C: CostProvider,
    {
        let mut recommendations = Vec::new();

        for instance in instances {
            if instance.state == InstanceState::Terminated {
                debug!("Skipping terminated instance {}", instance.id);
                continue;
            }

            debug!(
                "Analysing instance {} ({}, {})",
                instance.id, instance.instance_type, instance.state
            );

            let series = match metrics
                .get_cpu_utilisation(&instance.id, metric_hours)
                .await
            {
                Ok(series) => series,
                Err(e) => {
                    warn!("Failed to load CPU metrics for {}: {}", instance.id, e);
                    recommendations.push(unknown_recommendation(instance, &e.to_string()));
                    continue;
                }
            };

            let cost = match costs.get_instance_cost(&instance.id, cost_days).await {
                Ok(cost) => cost,
                Err(e) => {
                    debug!(
                        "Failed to load cost for {}, assuming zero: {}",
                        instance.id, e
                    );
                    CostData::zero(&instance.id)
                }
            };

            recommendations.push(classify(
                instance,
                &series.samples,
                &cost,
                metric_hours,
                &self.thresholds,
            ));
        }

        info!(
            "Generated {} recommendations from {} instances",
            recommendations.len(),
            instances.len()
        );
        Ok(recommendations)
    }
}

/// Analyse instances with the default thresholds
pub async fn analyse_instances<M, C>(
    instances: &[Instance],
    metrics: &M,
    costs: &C,
    metric_hours: u32,
    cost_days: u32,
) -> Result<Vec<Recommendation>>
where
    M: MetricsProvider,
    C: CostProvider,
{
    Analyser::default()
        .analyse_instances(instances, metrics, costs, metric_hours, cost_days)
        .await
}

/// Apply the rightsizing rules to one instance's samples and cost
///
/// Rules are checked in priority order and the first match wins: no data,
/// underutilised, overutilised, otherwise keep.
pub fn classify(
    instance: &Instance,
    samples: &[f64],
    cost: &CostData,
    metric_hours: u32,
    thresholds: &Thresholds,
) -> Recommendation {
    let avg_cpu = average(samples);
    let peak_cpu = peak(samples);
    let idle_ratio = fraction_below(samples, thresholds.idle_cpu);

    let underutilised = avg_cpu < thresholds.low_avg_cpu && peak_cpu < thresholds.low_peak_cpu;
    let overutilised = avg_cpu > thresholds.high_avg_cpu;

    let (action, suggested_type, estimated_saving, reason) =
        match (samples.is_empty(), underutilised, overutilised) {
            (true, _, _) => (
                Action::Review,
                String::new(),
                0.0,
                "No CPU data available; instance may be idle or not sending metrics.".to_string(),
            ),
            (false, true, _) => {
                let suggested = downsize_type(&instance.instance_type);
                let saving = if cost.monthly_cost > 0.0 && suggested != instance.instance_type {
                    cost.monthly_cost * thresholds.downsize_saving_ratio
                } else {
                    0.0
                };
                (
                    Action::Downsize,
                    suggested,
                    saving,
                    format!(
                        "Average CPU {:.1}%, peak {:.1}%, idle {:.0}% of samples; strong downsize candidate.",
                        avg_cpu,
                        peak_cpu,
                        idle_ratio * 100.0
                    ),
                )
            }
            (false, false, true) => (
                Action::Upsize,
                upsize_type(&instance.instance_type),
                0.0,
                format!(
                    "Average CPU {:.1}% over {} hours; instance appears heavily utilized.",
                    avg_cpu, metric_hours
                ),
            ),
            (false, false, false) => (
                Action::Keep,
                String::new(),
                0.0,
                format!(
                    "Average CPU {:.1}%, peak {:.1}%; utilization appears reasonable.",
                    avg_cpu, peak_cpu
                ),
            ),
        };

    Recommendation {
        instance_id: instance.id.clone(),
        instance_type: instance.instance_type.clone(),
        state: instance.state.clone(),
        avg_cpu,
        peak_cpu,
        monthly_cost: cost.monthly_cost,
        hourly_cost: cost.hourly_cost,
        action,
        suggested_type,
        estimated_saving,
        reason,
    }
}

fn unknown_recommendation(instance: &Instance, error: &str) -> Recommendation {
    Recommendation {
        instance_id: instance.id.clone(),
        instance_type: instance.instance_type.clone(),
        state: instance.state.clone(),
        avg_cpu: 0.0,
        peak_cpu: 0.0,
        monthly_cost: 0.0,
        hourly_cost: 0.0,
        action: Action::Unknown,
        suggested_type: String::new(),
        estimated_saving: 0.0,
        reason: format!("Failed to load CPU metrics: {}", error),
    }
}
