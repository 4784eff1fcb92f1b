pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::settings::Settings;
pub use core::{
    engine::ReportEngine, matcher::RegexRule, pipeline::SummaryPipeline, report::RenderConfig,
};
pub use utils::error::{AggregatorError, Result};
