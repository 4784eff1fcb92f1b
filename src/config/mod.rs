pub mod cli;
pub mod settings;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "topic-aggregator")]
#[command(about = "Collects keyword-matching page fragments into a single report")]
pub struct CliConfig {
    #[arg(help = "File listing one source URL per line")]
    pub source_file: String,

    #[arg(help = "Topic keyword, also names the report file")]
    pub topic: String,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, help = "Optional TOML settings file")]
    pub settings: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_file(&self) -> &str {
        &self.source_file
    }

    fn topic(&self) -> &str {
        &self.topic
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source_file", &self.source_file)?;
        validation::validate_filename_component("topic", &self.topic)?;
        validation::validate_path("output_dir", &self.output_dir)?;

        if let Some(settings) = &self.settings {
            validation::validate_path("settings", settings)?;
        }

        Ok(())
    }
}
