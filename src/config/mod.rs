use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_parent_dir, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "cities1000.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "cities1000_filtered.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gazetteer-filter")]
#[command(about = "Keep name, latitude, longitude and country code from a GeoNames dump")]
pub struct CliConfig {
    /// Tab-separated gazetteer to read
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input_path: String,

    /// Comma-separated file to create or truncate
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process memory and CPU around the projection")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            verbose: false,
            monitor: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn monitor_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_parent_dir("output_path", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}
