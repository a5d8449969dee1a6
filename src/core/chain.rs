use crate::config::toml_config::{ChainConfig, ReduceConfig, Step};
use crate::core::{Pipeline, Result, Sequence};
use crate::domain::ops::Combine;

/// 由 `ChainConfig` 建立的串接：字面值 → 依序 map / filter → reduce
#[derive(Debug, Clone)]
pub struct ConfiguredChain {
    config: ChainConfig,
}

impl ConfiguredChain {
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    fn reduce_config(&self) -> ReduceConfig {
        self.config.reduce.unwrap_or(ReduceConfig {
            op: Combine::Sum,
            initial: 0,
        })
    }
}

impl Pipeline for ConfiguredChain {
    fn name(&self) -> &str {
        &self.config.chain.name
    }

    fn extract(&self) -> Result<Sequence<i64>> {
        Ok(self.config.values())
    }

    fn transform(&self, data: Sequence<i64>) -> Result<Sequence<i64>> {
        let mut current = data;
        for (index, step) in self.config.steps.iter().enumerate() {
            current = match step {
                Step::Map(transform) => {
                    let mapped = current.try_map(|it| transform.apply(*it))?;
                    tracing::debug!("step {}: map {} over {} values", index, transform, mapped.len());
                    mapped
                }
                Step::Filter(predicate) => {
                    let kept = current.try_filter(|it| predicate.test(*it))?;
                    tracing::debug!(
                        "step {}: filter {} kept {} of {} values",
                        index,
                        predicate,
                        kept.len(),
                        current.len()
                    );
                    kept
                }
            };
        }
        Ok(current)
    }

    fn reduce(&self, data: Sequence<i64>) -> Result<i64> {
        let ReduceConfig { op, initial } = self.reduce_config();
        data.try_reduce(|acc, it| op.apply(acc, *it), initial)
    }
}
