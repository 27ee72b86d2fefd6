use crate::core::Pipeline;
use crate::domain::model::EmitSummary;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub descriptions: usize,
    pub class_lines: usize,
    pub emitted: EmitSummary,
    pub elapsed: Duration,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let start = Instant::now();
        tracing::info!("Starting SCOP conversion");

        // Extract
        let raw_data = self.pipeline.extract()?;
        let descriptions = raw_data.descriptions.len();
        let class_lines = raw_data.class_lines.len();
        tracing::info!(
            "Extracted {} descriptions and {} classification lines",
            descriptions,
            class_lines
        );

        // Transform
        let transformed = self.pipeline.transform(raw_data)?;
        tracing::info!(
            "Built taxonomy: {} family domains, {} superfamily domains, {} relation edges",
            transformed.taxonomy.domains.family.len(),
            transformed.taxonomy.domains.superfamily.len(),
            transformed.taxonomy.edge_count()
        );

        // Load
        let emitted = self.pipeline.load(transformed)?;
        tracing::info!(
            "Wrote {} domain terms, {} classification terms, {} hierarchy edges",
            emitted.family_domains + emitted.superfamily_domains,
            emitted.classification_terms,
            emitted.hierarchy_edges
        );

        Ok(RunSummary {
            descriptions,
            class_lines,
            emitted,
            elapsed: start.elapsed(),
        })
    }
}
