use crate::config::DEFAULT_LAYER_NAME;
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, validate_target, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: TargetConfig,
    pub run: Option<RunConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub file: String,
    pub layer_name: Option<String>,
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| EtlError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASSET_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// CLI 的 --dry-run 只能開啟，不能關閉設定檔中的 dry_run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        if dry_run {
            self.run.get_or_insert_with(RunConfig::default).dry_run = Some(true);
        }
        self
    }
}

impl ConfigProvider for TomlConfig {
    fn file_path(&self) -> &str {
        &self.target.file
    }

    fn layer_name(&self) -> &str {
        self.target.layer_name.as_deref().unwrap_or(DEFAULT_LAYER_NAME)
    }

    fn base_path(&self) -> &str {
        self.target.base_dir.as_deref().unwrap_or(".")
    }

    fn dry_run(&self) -> bool {
        self.run.as_ref().and_then(|r| r.dry_run).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_target(
            "target.file",
            &self.target.file,
            "target.layer_name",
            self.layer_name(),
        )?;
        validate_path("target.base_dir", self.base_path())
    }
}
