use crate::domain::model::{DescriptionPolicy, EmitSummary, Extracted, TransformResult};
use crate::utils::error::Result;
use std::io::BufRead;

pub trait Storage {
    fn open(&self, path: &str) -> Result<Box<dyn BufRead + '_>>;
}

pub trait ConfigProvider {
    fn class_file(&self) -> &str;
    fn description_file(&self) -> &str;
    fn emit_prefixes(&self) -> bool;
    fn description_policy(&self) -> DescriptionPolicy;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Extracted>;
    fn transform(&self, data: Extracted) -> Result<TransformResult>;
    fn load(&mut self, result: TransformResult) -> Result<EmitSummary>;
}
