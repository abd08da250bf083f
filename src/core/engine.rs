use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs one conversion: extract, then load. Nothing is written when
/// extraction fails.
pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting conversion");

        let record = self.pipeline.extract()?;
        tracing::info!("Loaded record with {} field(s)", record.len());

        let output_path = self.pipeline.load(&record)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
