use crate::domain::model::DescriptionPolicy;
use crate::utils::error::{Result, ScopError};
use crate::utils::validation::{validate_optional_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub class_file: Option<String>,
    pub description_file: Option<String>,
    pub description_policy: Option<DescriptionPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub prefixes: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScopError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScopError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCOP_DATA})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("input.class_file", self.input.class_file.as_deref())?;
        validate_optional_path("input.description_file", self.input.description_file.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
class_file = "scop-cla-latest.txt"
description_file = "scop-des-latest.txt"
description_policy = "lenient"

[output]
prefixes = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.class_file.as_deref(), Some("scop-cla-latest.txt"));
        assert_eq!(config.input.description_policy, Some(DescriptionPolicy::Lenient));
        assert_eq!(config.output.prefixes, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_allowed() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.input.class_file.is_none());
        assert!(config.output.prefixes.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SCOP_RDF_TEST_DIR", "/data/scop");
        let toml_content = r#"
[input]
class_file = "${SCOP_RDF_TEST_DIR}/scop-cla-latest.txt"
description_file = "${SCOP_RDF_TEST_UNSET_VAR}/des.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.input.class_file.as_deref(),
            Some("/data/scop/scop-cla-latest.txt")
        );
        assert_eq!(
            config.input.description_file.as_deref(),
            Some("${SCOP_RDF_TEST_UNSET_VAR}/des.txt")
        );

        std::env::remove_var("SCOP_RDF_TEST_DIR");
    }

    #[test]
    fn test_invalid_values() {
        assert!(TomlConfig::from_toml_str("[input]\ndescription_policy = \"sometimes\"\n").is_err());

        let config = TomlConfig::from_toml_str("[input]\nclass_file = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nprefixes = false\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.prefixes, Some(false));
    }
}
