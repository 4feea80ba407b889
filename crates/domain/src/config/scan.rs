use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Query budget per authoritative server
    #[serde(default = "default_qps")]
    pub qps: u32,

    #[serde(default = "default_result_buffer")]
    pub result_buffer: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            qps: default_qps(),
            result_buffer: default_result_buffer(),
        }
    }
}

fn default_qps() -> u32 {
    10
}

fn default_result_buffer() -> usize {
    100
}
