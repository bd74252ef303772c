pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_target, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILE: &str = "public/lottie/travel-smart.json";
pub const DEFAULT_LAYER_NAME: &str = "Group Layer 8";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lottie-unmark")]
#[command(about = "Remove the watermark layer from a Lottie animation file")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_FILE)]
    pub file: String,

    #[arg(long, default_value = DEFAULT_LAYER_NAME)]
    pub layer_name: String,

    #[arg(long, default_value = ".")]
    pub base_dir: String,

    /// Load target settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Report what would be removed without writing")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_FILE.to_string(),
            layer_name: DEFAULT_LAYER_NAME.to_string(),
            base_dir: ".".to_string(),
            config: None,
            dry_run: false,
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn file_path(&self) -> &str {
        &self.file
    }

    fn layer_name(&self) -> &str {
        &self.layer_name
    }

    fn base_path(&self) -> &str {
        &self.base_dir
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_target("file", &self.file, "layer_name", &self.layer_name)?;
        validate_path("base_dir", &self.base_dir)
    }
}
