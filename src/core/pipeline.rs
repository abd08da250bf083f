use crate::core::loader::Loader;
use crate::core::saver::Saver;
use crate::domain::format::Format;
use crate::domain::model::Record;
use crate::domain::ports::{ConversionSettings, Pipeline, Storage};
use crate::utils::error::Result;

/// 已決定好格式的轉換計畫；建立時不會做任何 I/O
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    pub input_path: String,
    pub output_path: String,
    pub input_format: Format,
    pub output_format: Format,
}

impl ConversionPlan {
    pub fn new(
        input_path: impl Into<String>,
        output_path: impl Into<String>,
        input_format: Format,
        output_format: Format,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            input_format,
            output_format,
        }
    }

    /// Infers both formats from the file extensions.
    pub fn infer(input_path: impl Into<String>, output_path: impl Into<String>) -> Result<Self> {
        let input_path = input_path.into();
        let output_path = output_path.into();
        let input_format = Format::from_path(&input_path)?;
        let output_format = Format::from_path(&output_path)?;
        Ok(Self::new(input_path, output_path, input_format, output_format))
    }

    pub fn resolve<C: ConversionSettings + ?Sized>(settings: &C) -> Result<Self> {
        Ok(Self::new(
            settings.input_path(),
            settings.output_path(),
            settings.input_format()?,
            settings.output_format()?,
        ))
    }
}

pub struct ConversionPipeline<S: Storage> {
    storage: S,
    plan: ConversionPlan,
}

impl<S: Storage> ConversionPipeline<S> {
    pub fn new(storage: S, plan: ConversionPlan) -> Self {
        Self { storage, plan }
    }
}

impl<S: Storage> Pipeline for ConversionPipeline<S> {
    fn extract(&self) -> Result<Record> {
        Loader::new(&self.storage).load(self.plan.input_format, &self.plan.input_path)
    }

    fn load(&self, record: &Record) -> Result<String> {
        Saver::new(&self.storage).save(self.plan.output_format, record, &self.plan.output_path)?;
        Ok(self.plan.output_path.clone())
    }
}
