use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 分類代碼 → 說明文字；同一代碼重複時以後者為準
pub type DescriptionTable = IndexMap<String, String>;

/// 分類路徑中的 `KEY=VALUE` 組合，例如 `TP=1,CL=1000003,CF=2001470,SF=3002524`
pub type ClassPath = IndexMap<String, String>;

/// Minimum number of whitespace separated fields in a classification record.
pub const RECORD_FIELD_COUNT: usize = 11;

/// One data line of the SCOP classification table.
///
/// Field positions follow the `scop-cla` header:
/// `FA-DOMID FA-PDBID FA-PDBREG FA-UNIID FA-UNIREG SF-DOMID SF-PDBID SF-PDBREG SF-UNIID SF-UNIREG SCOPCLA`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub fields: Vec<String>,
    pub class_path: ClassPath,
}

impl ClassificationRecord {
    pub fn family_domain_id(&self) -> &str {
        &self.fields[0]
    }

    pub fn superfamily_domain_id(&self) -> &str {
        &self.fields[5]
    }

    /// 家族 domain 的明細：欄位 1–4 再加上欄位 10
    pub fn family_detail(&self) -> DomainDetail {
        DomainDetail {
            pdb_id: self.fields[1].clone(),
            pdb_region: self.fields[2].clone(),
            uniprot_id: self.fields[3].clone(),
            uniprot_region: self.fields[4].clone(),
            annotation: self.fields[10].clone(),
        }
    }

    /// 超家族 domain 的明細：欄位 6–10
    pub fn superfamily_detail(&self) -> DomainDetail {
        DomainDetail {
            pdb_id: self.fields[6].clone(),
            pdb_region: self.fields[7].clone(),
            uniprot_id: self.fields[8].clone(),
            uniprot_region: self.fields[9].clone(),
            annotation: self.fields[10].clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainDetail {
    pub pdb_id: String,
    pub pdb_region: String,
    pub uniprot_id: String,
    pub uniprot_region: String,
    pub annotation: String,
}

/// Domain id → every detail tuple seen for it, in input order.
pub type DomainDetails = IndexMap<String, Vec<DomainDetail>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainDetailTable {
    pub family: DomainDetails,
    pub superfamily: DomainDetails,
}

/// Parent classification code → child codes. Duplicates are kept here and
/// collapsed when the hierarchy is written.
pub type RelationTable = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub value: String,
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub domains: DomainDetailTable,
    pub relations: RelationTable,
    pub release: Option<ReleaseInfo>,
    pub metadata: Vec<String>,
}

impl Taxonomy {
    pub fn edge_count(&self) -> usize {
        self.relations.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionPolicy {
    /// 格式錯誤的說明行直接中止轉換
    #[default]
    Strict,
    /// 記錄警告後略過該行
    Lenient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionLoad {
    pub table: DescriptionTable,
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Extracted {
    pub descriptions: DescriptionTable,
    pub class_lines: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub descriptions: DescriptionTable,
    pub taxonomy: Taxonomy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub family_domains: usize,
    pub superfamily_domains: usize,
    pub classification_terms: usize,
    pub hierarchy_edges: usize,
}
