use crate::core::classification::{parse_line, release_from_comment, ParsedLine};
use crate::domain::model::{ClassPath, ClassificationRecord, Taxonomy};
use crate::utils::error::Result;

/// 分類路徑上固定的三條父子關係
pub const HIERARCHY_EDGES: [(&str, &str); 3] = [("TP", "CL"), ("CL", "CF"), ("CF", "SF")];

#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    taxonomy: Taxonomy,
    records: usize,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one classification line and folds it into the taxonomy.
    pub fn ingest_line(&mut self, line: &str, line_number: usize) -> Result<()> {
        match parse_line(line, line_number)? {
            ParsedLine::Comment(comment) => {
                if let Some(release) = release_from_comment(&comment) {
                    tracing::debug!("Found SCOP release {}", release.value);
                    self.taxonomy.release = Some(release);
                }
                self.taxonomy.metadata.push(comment);
            }
            ParsedLine::Record(record) => self.ingest_record(&record),
            ParsedLine::Blank => {}
        }
        Ok(())
    }

    pub fn ingest_record(&mut self, record: &ClassificationRecord) {
        self.add_relations(&record.class_path);

        self.taxonomy
            .domains
            .family
            .entry(record.family_domain_id().to_string())
            .or_default()
            .push(record.family_detail());
        self.taxonomy
            .domains
            .superfamily
            .entry(record.superfamily_domain_id().to_string())
            .or_default()
            .push(record.superfamily_detail());

        self.records += 1;
    }

    fn add_relations(&mut self, path: &ClassPath) {
        for (parent_key, child_key) in HIERARCHY_EDGES {
            let parent = path.get(parent_key).filter(|v| !v.is_empty());
            let child = path.get(child_key).filter(|v| !v.is_empty());
            if let (Some(parent), Some(child)) = (parent, child) {
                self.taxonomy
                    .relations
                    .entry(parent.clone())
                    .or_default()
                    .push(child.clone());
            }
        }
    }

    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn finish(self) -> Taxonomy {
        tracing::debug!(
            "Taxonomy built from {} records: {} family domains, {} superfamily domains, {} parents",
            self.records,
            self.taxonomy.domains.family.len(),
            self.taxonomy.domains.superfamily.len(),
            self.taxonomy.relations.len()
        );
        self.taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(fa: &str, sf: &str, path: &str) -> String {
        format!(
            "{} 1abc A:1-100 P12345,P67890 1-100 {} 1abc A:1-100 P12345 1-100 {}",
            fa, sf, path
        )
    }

    #[test]
    fn test_full_path_adds_three_edges() {
        let mut builder = TaxonomyBuilder::new();
        builder
            .ingest_line(&record_line("8045703", "8045703", "TP=1,CL=46456,CF=46457,SF=46458"), 1)
            .unwrap();
        let taxonomy = builder.finish();

        assert_eq!(taxonomy.edge_count(), 3);
        assert_eq!(taxonomy.relations["1"], vec!["46456"]);
        assert_eq!(taxonomy.relations["46456"], vec!["46457"]);
        assert_eq!(taxonomy.relations["46457"], vec!["46458"]);
    }

    #[test]
    fn test_missing_key_skips_edge() {
        let mut builder = TaxonomyBuilder::new();
        builder
            .ingest_line(&record_line("8045703", "8091604", "TP=1,CL=46456,SF=46458"), 1)
            .unwrap();
        let taxonomy = builder.finish();

        assert_eq!(taxonomy.edge_count(), 1);
        assert!(!taxonomy.relations.contains_key("46456"));
        assert!(!taxonomy.relations.contains_key("46457"));
    }

    #[test]
    fn test_reingesting_appends_detail() {
        let line = record_line("8045703", "8091604", "TP=1,CL=46456,CF=46457,SF=46458");
        let other = "8045703 2xyz A:1-90 Q11111 1-90 8091604 2xyz A:1-90 Q11111 1-90 TP=1,CL=46456,CF=46457,SF=46458";
        let mut builder = TaxonomyBuilder::new();
        builder.ingest_line(&line, 1).unwrap();
        builder.ingest_line(&line, 2).unwrap();
        builder.ingest_line(other, 3).unwrap();
        assert_eq!(builder.record_count(), 3);
        let taxonomy = builder.finish();

        let family = &taxonomy.domains.family["8045703"];
        assert_eq!(family.len(), 3);
        assert_eq!(family[0].pdb_id, "1abc");
        assert_eq!(family[0], family[1]);
        assert_eq!(taxonomy.domains.superfamily["8091604"].len(), 3);
        // 重複的邊在這個階段保留
        assert_eq!(taxonomy.relations["46456"].len(), 3);
    }

    #[test]
    fn test_ingest_record_with_named_domain_ids() {
        let fields = "d1abcA_ 1abc A:1-100 P12345 1-100 d1abcA_ 1abc A:1-100 P12345 1-100"
            .split_whitespace()
            .map(str::to_string)
            .chain(std::iter::once("TP=1,CL=46456,CF=46457,SF=46458".to_string()))
            .collect::<Vec<_>>();
        let class_path = crate::core::classification::parse_class_path(&fields[10], 1).unwrap();
        let record = ClassificationRecord { fields, class_path };

        let mut builder = TaxonomyBuilder::new();
        builder.ingest_record(&record);
        let taxonomy = builder.finish();

        assert_eq!(taxonomy.domains.family["d1abcA_"][0].pdb_id, "1abc");
        assert_eq!(taxonomy.domains.superfamily["d1abcA_"][0].uniprot_id, "P12345");
        assert_eq!(taxonomy.edge_count(), 3);
    }

    #[test]
    fn test_release_comment_is_captured() {
        let mut builder = TaxonomyBuilder::new();
        builder.ingest_line("# SCOP release 2023-01-06", 1).unwrap();
        builder.ingest_line("# http://scop.mrc-lmb.cam.ac.uk", 2).unwrap();
        let taxonomy = builder.finish();

        assert_eq!(taxonomy.release.unwrap().value, "2023-01-06");
        assert_eq!(taxonomy.metadata.len(), 2);
    }

    #[test]
    fn test_bad_line_leaves_builder_untouched() {
        let mut builder = TaxonomyBuilder::new();
        assert!(builder.ingest_line("not a valid line", 1).is_err());
        assert_eq!(builder.record_count(), 0);
        assert!(builder.finish().domains.family.is_empty());
    }
}
