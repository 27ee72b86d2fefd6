pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::DescriptionPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "scop-rdf")]
#[command(about = "Convert SCOP classification tables to RDF Turtle")]
pub struct CliConfig {
    /// SCOP classification file (scop-cla)
    #[arg(short = 'c', long = "class", value_name = "FILE")]
    pub class_file: Option<String>,

    /// SCOP description file (scop-des)
    #[arg(short = 'd', long = "description", value_name = "FILE")]
    pub description_file: Option<String>,

    /// Print @prefix declarations before the triples
    #[arg(short = 'p', long)]
    pub prefixes: bool,

    /// Optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Warn about and skip malformed description lines instead of failing
    #[arg(long)]
    pub lenient_descriptions: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列與 TOML 設定；缺少任一輸入檔時回傳 `None`
    pub fn resolve(&self) -> Result<Option<ConversionConfig>> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let policy = if self.lenient_descriptions {
            DescriptionPolicy::Lenient
        } else {
            file_config.input.description_policy.unwrap_or_default()
        };

        Ok(ConversionConfig::from_parts(
            self.class_file.clone().or(file_config.input.class_file),
            self.description_file
                .clone()
                .or(file_config.input.description_file),
            self.prefixes || file_config.output.prefixes.unwrap_or(false),
            policy,
        ))
    }
}

/// Fully resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub class_file: String,
    pub description_file: String,
    pub prefixes: bool,
    pub description_policy: DescriptionPolicy,
}

impl ConversionConfig {
    pub fn from_parts(
        class_file: Option<String>,
        description_file: Option<String>,
        prefixes: bool,
        description_policy: DescriptionPolicy,
    ) -> Option<Self> {
        Some(Self {
            class_file: class_file?,
            description_file: description_file?,
            prefixes,
            description_policy,
        })
    }
}

impl Validate for ConversionConfig {
    fn validate(&self) -> Result<()> {
        validate_path("class_file", &self.class_file)?;
        validate_path("description_file", &self.description_file)?;
        Ok(())
    }
}

impl ConfigProvider for ConversionConfig {
    fn class_file(&self) -> &str {
        &self.class_file
    }

    fn description_file(&self) -> &str {
        &self.description_file
    }

    fn emit_prefixes(&self) -> bool {
        self.prefixes
    }

    fn description_policy(&self) -> DescriptionPolicy {
        self.description_policy
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_short_and_long_flags() {
        let short = CliConfig::parse_from(["scop-rdf", "-c", "cla.txt", "-d", "des.txt", "-p"]);
        let long = CliConfig::parse_from([
            "scop-rdf",
            "--class",
            "cla.txt",
            "--description",
            "des.txt",
            "--prefixes",
        ]);

        for cli in [short, long] {
            let config = cli.resolve().unwrap().unwrap();
            assert_eq!(config.class_file, "cla.txt");
            assert_eq!(config.description_file, "des.txt");
            assert!(config.prefixes);
            assert_eq!(config.description_policy, DescriptionPolicy::Strict);
        }
    }

    #[test]
    fn test_missing_input_resolves_to_none() {
        let cli = CliConfig::parse_from(["scop-rdf", "-c", "cla.txt"]);
        assert!(cli.resolve().unwrap().is_none());

        let cli = CliConfig::parse_from(["scop-rdf", "-p"]);
        assert!(cli.resolve().unwrap().is_none());
    }

    #[test]
    fn test_cli_overrides_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[input]\nclass_file = \"file-cla.txt\"\ndescription_file = \"file-des.txt\"\ndescription_policy = \"lenient\"\n[output]\nprefixes = true\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let cli = CliConfig::parse_from(["scop-rdf", "--config", path, "-c", "cli-cla.txt"]);
        let config = cli.resolve().unwrap().unwrap();
        assert_eq!(config.class_file, "cli-cla.txt");
        assert_eq!(config.description_file, "file-des.txt");
        assert!(config.prefixes);
        assert_eq!(config.description_policy, DescriptionPolicy::Lenient);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = ConversionConfig::from_parts(
            Some(String::new()),
            Some("des.txt".to_string()),
            false,
            DescriptionPolicy::Strict,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
