//! Compute Instance Rightsizing Library
//!
//! This library correlates instance CPU utilisation with cost and generates
//! rule-based rightsizing recommendations (downsize, upsize or keep).

pub mod lib {
    pub mod analyser;
    pub mod catalog;
    pub mod cli;
    pub mod commands;
    pub mod config;
    pub mod error;
    pub mod logger;
    pub mod mock;
    pub mod model;
    pub mod output;
    pub mod providers;
    pub mod report;
    pub mod stats;
}

// Re-export commonly used types at the root level for convenience
pub use lib::analyser::{Analyser, Thresholds, analyse_instances, classify};
pub use lib::catalog::{downsize_type, upsize_type};
pub use lib::cli::{Cli, Commands, ModeCommand, RecommendArgs};
pub use lib::config::{AppConfig, Mode};
pub use lib::error::{ConfigError, CostError, DiscoveryError, MetricsError, OptimiserError, Result};
pub use lib::logger::init_logger;
pub use lib::mock::{MockCostProvider, MockInstanceSource, MockMetricsProvider};
pub use lib::model::{Action, CostData, CpuSampleSeries, Instance, InstanceState, Recommendation};
pub use lib::output::{OutputMetadata, RecommenderOutput};
pub use lib::providers::{CostProvider, InstanceSource, MetricsProvider};
pub use lib::report::{RecommendationFilter, SortKey, sort_recommendations};
pub use lib::stats::{average, fraction_below, peak};
