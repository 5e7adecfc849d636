use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckerConfig {
    pub paths: PathsConfig,
    pub limits: LimitsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Reject relative input and output paths.
    pub require_absolute: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { require_absolute: true }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest normalized document, in code points, the checker will compare.
    /// Comparison time grows with the product of both lengths.
    pub max_document_chars: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Create missing parent directories of the output file.
    pub create_parent_dirs: bool,
    /// Print the per-signal breakdown as JSON on stdout.
    pub breakdown: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            create_parent_dirs: true,
            breakdown: false,
        }
    }
}
