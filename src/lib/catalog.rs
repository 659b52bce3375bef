//! Static sizing catalog used to suggest replacement instance types.
//!
//! Instance types are `<family>.<size>`. Each family lists its sizes from
//! smallest to largest; neighbors in that list are the downsize/upsize
//! candidates. Types outside the catalog are returned unchanged.

const BURSTABLE_SIZES: &[&str] = &[
    "nano", "micro", "small", "medium", "large", "xlarge", "2xlarge",
];

const M5_SIZES: &[&str] = &["medium", "large", "xlarge", "2xlarge"];

const COMPUTE_MEMORY_SIZES: &[&str] = &["large", "xlarge", "2xlarge", "4xlarge"];

const FAMILIES: &[(&str, &[&str])] = &[
    ("t2", BURSTABLE_SIZES),
    ("t3", BURSTABLE_SIZES),
    ("t3a", BURSTABLE_SIZES),
    ("m5", M5_SIZES),
    ("c5", COMPUTE_MEMORY_SIZES),
    ("r5", COMPUTE_MEMORY_SIZES),
];

/// Ordered sizes of a known family
pub fn family_sizes(family: &str) -> Option<&'static [&'static str]> {
    FAMILIES
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, sizes)| *sizes)
}

/// Next smaller type in the same family, or `current` if there is none
pub fn downsize_type(current: &str) -> String {
    neighbor(current, -1).unwrap_or_else(|| current.to_string())
}

/// Next larger type in the same family, or `current` if there is none
pub fn upsize_type(current: &str) -> String {
    neighbor(current, 1).unwrap_or_else(|| current.to_string())
}

fn neighbor(current: &str, step: isize) -> Option<String> {
    let (family, size) = current.split_once('.')?;
    let sizes = family_sizes(family)?;
    let index = sizes.iter().position(|s| *s == size)?;
    let target = index.checked_add_signed(step)?;
    sizes.get(target).map(|s| format!("{family}.{s}"))
}
