//! Default configuration values

/// Manifest file looked up in the working directory
pub const MANIFEST_FILE: &str = "matrix.toml";

/// Environment variable overriding the manifest path
pub const MANIFEST_ENV: &str = "MATRIXSORT_MANIFEST";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
