use crate::core::Pipeline;
use crate::domain::model::ChainOutcome;
use crate::utils::error::Result;

pub struct ChainEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ChainEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<ChainOutcome> {
        let name = self.pipeline.name();
        tracing::info!("Starting chain '{}'", name);

        // Extract
        let values = self.pipeline.extract()?;
        let input_len = values.len();
        tracing::debug!("Extracted {} values", input_len);

        // Transform
        let transformed = self.pipeline.transform(values)?;
        let surviving_len = transformed.len();
        tracing::debug!("{} of {} values survived the steps", surviving_len, input_len);

        // Reduce
        let result = self.pipeline.reduce(transformed)?;
        tracing::info!("Chain '{}' reduced to {}", name, result);

        Ok(ChainOutcome {
            chain: name.to_string(),
            input_len,
            surviving_len,
            result,
        })
    }
}
