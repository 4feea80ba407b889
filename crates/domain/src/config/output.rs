use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print a single JSON document on stdout instead of the text report.
    #[serde(default)]
    pub json: bool,
}
