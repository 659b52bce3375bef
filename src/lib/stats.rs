//! Aggregate statistics over CPU sample series.
//!
//! All functions return 0 for an empty series rather than failing.

/// Arithmetic mean of the samples
pub fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Maximum sample value
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Fraction of samples strictly below `threshold`
pub fn fraction_below(samples: &[f64], threshold: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let below = samples.iter().filter(|&&v| v < threshold).count();
    below as f64 / samples.len() as f64
}
