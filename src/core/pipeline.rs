use crate::core::description::load_descriptions;
use crate::core::taxonomy::TaxonomyBuilder;
use crate::core::turtle::TurtleEmitter;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{EmitSummary, Extracted, TransformResult};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// SCOP 轉換流程：讀兩個輸入檔 → 建立分類樹 → 輸出 Turtle
pub struct ScopPipeline<S: Storage, C: ConfigProvider, W: Write> {
    storage: S,
    config: C,
    out: W,
}

impl<S: Storage, C: ConfigProvider, W: Write> ScopPipeline<S, C, W> {
    pub fn new(storage: S, config: C, out: W) -> Self {
        Self {
            storage,
            config,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<S: Storage, C: ConfigProvider, W: Write> Pipeline for ScopPipeline<S, C, W> {
    fn extract(&self) -> Result<Extracted> {
        tracing::debug!("Reading descriptions from: {}", self.config.description_file());
        let load = {
            let reader = self.storage.open(self.config.description_file())?;
            load_descriptions(reader, self.config.description_policy())?
        };
        if load.skipped_lines > 0 {
            tracing::warn!("{} malformed description lines were skipped", load.skipped_lines);
        }

        tracing::debug!("Reading classification from: {}", self.config.class_file());
        let reader = self.storage.open(self.config.class_file())?;
        let class_lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;

        Ok(Extracted {
            descriptions: load.table,
            class_lines,
        })
    }

    fn transform(&self, data: Extracted) -> Result<TransformResult> {
        let mut builder = TaxonomyBuilder::new();
        for (index, line) in data.class_lines.iter().enumerate() {
            builder.ingest_line(line, index + 1)?;
        }
        tracing::debug!("Parsed {} classification records", builder.record_count());

        Ok(TransformResult {
            descriptions: data.descriptions,
            taxonomy: builder.finish(),
        })
    }

    fn load(&mut self, result: TransformResult) -> Result<EmitSummary> {
        let mut emitter = TurtleEmitter::new(&mut self.out, self.config.emit_prefixes());
        emitter.emit(&result.descriptions, &result.taxonomy)
    }
}
