use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// 一次串接執行的結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainOutcome {
    pub chain: String,
    pub input_len: usize,
    pub surviving_len: usize,
    pub result: i64,
}

impl ChainOutcome {
    /// 輸出到 stdout 的單行結果
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.result.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
                "chain": self.chain,
                "result": self.result,
            }))?),
        }
    }
}
