use crate::catalog::DEFAULT_ALLOW_LIST;
use crate::domain::model::ModelDefinition;
use crate::domain::ports::ModelCatalog;
use crate::utils::error::{Result, TypegenError};
use crate::utils::validation::{validate_allow_list, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypegenConfig {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    pub allow_list: Vec<String>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            allow_list: DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

impl TypegenConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TypegenError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TypegenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
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

    /// 命令列指定的輸出路徑優先於設定檔
    pub fn with_output(mut self, path: impl Into<String>) -> Self {
        self.output.path = Some(path.into());
        self
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    /// 依允許清單順序從目錄取出模型定義
    pub fn resolve_models<C: ModelCatalog>(&self, catalog: &C) -> Result<Vec<ModelDefinition>> {
        catalog.resolve(self.models.allow_list.as_slice())
    }
}

impl Validate for TypegenConfig {
    fn validate(&self) -> Result<()> {
        validate_allow_list(self.models.allow_list.as_slice())?;

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IndoorMapCatalog;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[models]
allow_list = ["Point2f", "Room"]

[output]
path = "./web/src/types/models.ts"
"#;

        let config = TypegenConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.models.allow_list, vec!["Point2f", "Room"]);
        assert_eq!(config.output_path(), Some("./web/src/types/models.ts"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_default_allow_list() {
        let config = TypegenConfig::from_toml_str("").unwrap();
        assert_eq!(config.models.allow_list, DEFAULT_ALLOW_LIST);
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MAP_TYPEGEN_TEST_OUT", "/tmp/generated");

        let toml_content = r#"
[output]
path = "${MAP_TYPEGEN_TEST_OUT}/models.ts"
"#;

        let config = TypegenConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/generated/models.ts"));

        std::env::remove_var("MAP_TYPEGEN_TEST_OUT");
    }

    #[test]
    fn test_config_validation() {
        let duplicated = TypegenConfig::from_toml_str(
            r#"
[models]
allow_list = ["Point2f", "Point2f"]
"#,
        )
        .unwrap();
        assert!(matches!(
            duplicated.validate(),
            Err(TypegenError::DuplicateModel { .. })
        ));

        let empty = TypegenConfig::from_toml_str("[models]\nallow_list = []\n").unwrap();
        assert!(matches!(empty.validate(), Err(TypegenError::EmptyAllowList)));
    }

    #[test]
    fn test_output_override_replaces_configured_path() {
        let config = TypegenConfig::from_toml_str("[output]\npath = \"a/models.ts\"\n")
            .unwrap()
            .with_output("b/models.ts");
        assert_eq!(config.output_path(), Some("b/models.ts"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(TypegenConfig::from_toml_str("[models\nallow_list = 3").is_err());
    }

    #[test]
    fn test_resolve_models_in_config_order() {
        let config =
            TypegenConfig::from_toml_str("[models]\nallow_list = [\"Sensor\", \"Point2f\"]\n")
                .unwrap();
        let models = config.resolve_models(&IndoorMapCatalog::new()).unwrap();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Sensor", "Point2f"]);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[models]\nallow_list = [\"MapNode\"]\n")
            .unwrap();

        let config = TypegenConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.models.allow_list, vec!["MapNode"]);
    }
}
