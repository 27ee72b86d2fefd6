//! Turtle serialisation of a SCOP [`Taxonomy`].
//!
//! Output is written statement by statement to any [`Write`] sink; nothing is
//! kept in memory apart from the taxonomy itself.

use crate::domain::model::{DescriptionTable, DomainDetails, EmitSummary, ReleaseInfo, Taxonomy};
use crate::utils::error::Result;
use indexmap::IndexSet;
use std::io::Write;

pub const DATASET_URI: &str = "<http://scop.mrc-lmb.cam.ac.uk>";
pub const DATASET_LABEL: &str = "SCOP: Structural Classification of Proteins";

/// 固定的 namespace 表，不開放設定
pub const PREFIXES: [(&str, &str); 15] = [
    ("rdf", "<http://www.w3.org/1999/02/22-rdf-syntax-ns#>"),
    ("rdfs", "<http://www.w3.org/2000/01/rdf-schema#>"),
    ("skos", "<http://www.w3.org/2004/02/skos/core#>"),
    ("prov", "<http://www.w3.org/ns/prov#>"),
    ("pav", "<http://purl.org/pav/>"),
    ("obo", "<http://purl.obolibrary.org/obo/>"),
    ("mesh", "<http://id.nlm.nih.gov/mesh/>"),
    ("dct", "<http://purl.org/dc/terms/>"),
    ("pubmedid", "<http://identifiers.org/pubmed/>"),
    ("pubmed", "<http://rdf.ncbi.nlm.nih.gov/pubmed/>"),
    ("scop", "<http://scop.mrc-lmb.cam.ac.uk/term/>"),
    ("scop_idorg", "<http://identifiers.org/scop/>"),
    ("pdb", "<http://wwpdb.org/>"),
    ("up", "<http://pul.uniprot.org/uniprot/>"),
    ("xsd", "<http://www.w3.org/2001/XMLSchema#>"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DomainKind {
    Family,
    Superfamily,
}

impl DomainKind {
    fn rank(self) -> &'static str {
        match self {
            DomainKind::Family => "scop:FamilyDomain",
            DomainKind::Superfamily => "scop:SuperfamilyDomain",
        }
    }
}

/// Rank of a classification code, decided by its leading digit.
pub fn rank_for_code(code: &str) -> Option<&'static str> {
    if !is_classification_code(code) {
        return None;
    }
    match code.chars().next()? {
        '1' => Some("scop:StructuralClass"),
        '2' => Some("scop:Fold"),
        '3' => Some("scop:Superfamily"),
        '4' => Some("scop:Family"),
        _ => None,
    }
}

/// 長度超過 2 個字元的代碼才輸出為分類詞彙
pub fn is_classification_code(code: &str) -> bool {
    code.chars().count() > 2
}

/// 說明文字必須以 0–4 開頭才視為有效標籤
pub fn usable_label(label: Option<&String>) -> Option<&str> {
    label
        .map(String::as_str)
        .filter(|l| l.starts_with(['0', '1', '2', '3', '4']))
}

pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub struct TurtleEmitter<W: Write> {
    out: W,
    prefixes: bool,
}

impl<W: Write> TurtleEmitter<W> {
    pub fn new(out: W, prefixes: bool) -> Self {
        Self { out, prefixes }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn emit(&mut self, descriptions: &DescriptionTable, taxonomy: &Taxonomy) -> Result<EmitSummary> {
        let mut summary = EmitSummary::default();

        if self.prefixes {
            self.write_prefixes()?;
        }
        self.write_dataset(taxonomy.release.as_ref())?;

        summary.family_domains =
            self.write_domains(&taxonomy.domains.family, DomainKind::Family, descriptions)?;
        summary.superfamily_domains =
            self.write_domains(&taxonomy.domains.superfamily, DomainKind::Superfamily, descriptions)?;
        summary.classification_terms = self.write_classification_terms(descriptions)?;
        summary.hierarchy_edges = self.write_hierarchy(taxonomy)?;

        self.out.flush()?;
        Ok(summary)
    }

    pub fn write_prefixes(&mut self) -> Result<()> {
        for (prefix, uri) in PREFIXES {
            writeln!(self.out, "@prefix {}: {} .", prefix, uri)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn write_dataset(&mut self, release: Option<&ReleaseInfo>) -> Result<()> {
        writeln!(self.out, "{}", DATASET_URI)?;
        match release {
            Some(release) => {
                writeln!(self.out, "  rdfs:label \"{}\" ;", DATASET_LABEL)?;
                match release.date {
                    Some(date) => writeln!(
                        self.out,
                        "  dct:issued \"{}\"^^xsd:date .",
                        date.format("%Y-%m-%d")
                    )?,
                    // 無法解析成日期時不標 xsd:date
                    None => writeln!(
                        self.out,
                        "  dct:issued \"{}\" .",
                        escape_literal(&release.value)
                    )?,
                }
            }
            None => writeln!(self.out, "  rdfs:label \"{}\" .", DATASET_LABEL)?,
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn write_domains(
        &mut self,
        domains: &DomainDetails,
        kind: DomainKind,
        descriptions: &DescriptionTable,
    ) -> Result<usize> {
        let mut written = 0;
        for (id, details) in domains {
            // 只用第一筆明細
            let Some(first) = details.first() else {
                continue;
            };

            writeln!(self.out, "scop:{} a scop:Term ;", id)?;
            writeln!(self.out, "  dct:identifier \"{}\" ;", escape_literal(id))?;
            writeln!(self.out, "  scop:rank {} ;", kind.rank())?;
            if let Some(label) = usable_label(descriptions.get(id)) {
                writeln!(self.out, "  rdfs:label \"{}\" ;", escape_literal(label))?;
            }
            writeln!(self.out, "  skos:exactMatch scop_idorg:{} ;", id)?;
            writeln!(self.out, "  rdfs:seeAlso pdb:{} ;", first.pdb_id)?;
            let uniprot = match kind {
                DomainKind::Family => first
                    .uniprot_id
                    .split(',')
                    .map(|acc| format!("up:{}", acc))
                    .collect::<Vec<_>>()
                    .join(", "),
                DomainKind::Superfamily => format!("up:{}", first.uniprot_id),
            };
            writeln!(self.out, "  rdfs:seeAlso {} .", uniprot)?;
            writeln!(self.out)?;
            written += 1;
        }
        Ok(written)
    }

    fn write_classification_terms(&mut self, descriptions: &DescriptionTable) -> Result<usize> {
        let mut written = 0;
        for code in descriptions.keys().filter(|code| is_classification_code(code)) {
            writeln!(self.out, "scop:{} a scop:Term .", code)?;
            if let Some(rank) = rank_for_code(code) {
                writeln!(self.out, "scop:{} scop:rank {} .", code, rank)?;
            }
            written += 1;
        }
        Ok(written)
    }

    fn write_hierarchy(&mut self, taxonomy: &Taxonomy) -> Result<usize> {
        let mut written = 0;
        for (parent, children) in &taxonomy.relations {
            let distinct: IndexSet<&String> = children.iter().collect();
            for child in distinct {
                writeln!(self.out, "scop:{} rdfs:subClassOf scop:{} .", child, parent)?;
                writeln!(self.out, "scop:{} skos:narrower scop:{} .", parent, child)?;
                written += 1;
            }
        }
        Ok(written)
    }
}
