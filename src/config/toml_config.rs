pub use crate::domain::model::OutputFormat;
use crate::domain::ops::{Combine, Predicate, Transform};
use crate::domain::sequence::Sequence;
use crate::utils::error::{ChainError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain: ChainInfo,
    #[serde(default)]
    pub steps: Vec<Step>,
    pub reduce: Option<ReduceConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainInfo {
    pub name: String,
    pub description: Option<String>,
    pub values: Option<Sequence<i64>>,
}

/// 單一串接步驟，依設定檔中的順序執行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Map(Transform),
    Filter(Predicate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceConfig {
    pub op: Combine,
    #[serde(default)]
    pub initial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl Default for ChainConfig {
    /// 預設串接：[10, 20, 30, 40, 50] → ×3 → > 100 → sum(0)
    fn default() -> Self {
        Self {
            chain: ChainInfo {
                name: "default".to_string(),
                description: Some("Triple, keep values over 100, sum".to_string()),
                values: Some(Sequence::from([10, 20, 30, 40, 50])),
            },
            steps: vec![
                Step::Map(Transform::Multiply { value: 3 }),
                Step::Filter(Predicate::GreaterThan { value: 100 }),
            ],
            reduce: Some(ReduceConfig {
                op: Combine::Sum,
                initial: 0,
            }),
            output: None,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl ChainConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ChainError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ChainError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MULTIPLIER})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("chain.name", &self.chain.name)?;
        validation::validate_required_field("chain.values", &self.chain.values)?;
        validation::validate_required_field("reduce", &self.reduce)?;

        // 除數為零在執行前就能發現
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                Step::Map(Transform::Divide { value }) => {
                    validation::validate_non_zero(&format!("steps[{}].map.value", index), *value)?
                }
                Step::Filter(Predicate::DivisibleBy { value }) => validation::validate_non_zero(
                    &format!("steps[{}].filter.value", index),
                    *value,
                )?,
                _ => {}
            }
        }

        Ok(())
    }

    pub fn values(&self) -> Sequence<i64> {
        self.chain.values.clone().unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl Validate for ChainConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
