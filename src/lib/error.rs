use thiserror::Error;

/// Main error type for the rightsizer application
#[derive(Error, Debug)]
pub enum OptimiserError {
    /// Instance discovery errors
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// CPU metric retrieval errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    /// Cost retrieval errors
    #[error("Cost error: {0}")]
    Cost(#[from] CostError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Instance discovery errors
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Fixture file could not be read
    #[error("Failed to read instance data: {0}")]
    FixtureUnreadable(String),

    /// Fixture file is not valid instance data
    #[error("Failed to parse instance data: {0}")]
    InvalidFixture(String),
}

/// Metric retrieval errors
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Fixture file could not be read
    #[error("Failed to read metrics: {0}")]
    FixtureUnreadable(String),

    /// Fixture file is not valid metric data
    #[error("Failed to parse metrics: {0}")]
    InvalidFixture(String),

    /// Provider could not serve the request
    #[error("Metrics unavailable: {0}")]
    Unavailable(String),
}

/// Cost retrieval errors
#[derive(Error, Debug)]
pub enum CostError {
    /// Fixture file could not be read
    #[error("Failed to read cost data: {0}")]
    FixtureUnreadable(String),

    /// Fixture file is not valid cost data
    #[error("Failed to parse cost data: {0}")]
    InvalidFixture(String),

    /// Provider could not serve the request
    #[error("Cost data unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No usable configuration location
    #[error("Missing required: {0}")]
    MissingRequired(String),

    /// Invalid configuration value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Configuration file error
    #[error("File error: {0}")]
    FileError(String),
}

/// Helper type alias for Results
pub type Result<T> = std::result::Result<T, OptimiserError>;
