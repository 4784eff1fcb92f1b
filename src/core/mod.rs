pub mod engine;
pub mod fetch;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod sources;

pub use crate::domain::model::SourceMatches;
pub use crate::domain::ports::{ConfigProvider, MatchRule, Pipeline, Storage};
pub use crate::utils::error::Result;
