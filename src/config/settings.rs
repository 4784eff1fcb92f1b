use crate::core::matcher::{RegexRule, DEFAULT_MATCH_TEMPLATE};
use crate::core::report::RenderConfig;
use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::path::Path;

/// 選用的 TOML 設定檔,缺少的欄位一律補預設值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub report: Option<ReportSettings>,
    #[serde(rename = "match")]
    pub matching: Option<MatchSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSettings {
    pub entry_template: Option<String>,
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchSettings {
    pub pattern: Option<String>,
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AggregatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings = toml::from_str(content)?;
        Ok(settings)
    }

    pub fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        let report = self.report.clone().unwrap_or_default();

        RenderConfig {
            entry_template: report.entry_template.unwrap_or(defaults.entry_template),
            separator: report.separator.unwrap_or(defaults.separator),
        }
    }

    pub fn match_rule(&self) -> RegexRule {
        let template = self
            .matching
            .as_ref()
            .and_then(|m| m.pattern.clone())
            .unwrap_or_else(|| DEFAULT_MATCH_TEMPLATE.to_string());

        RegexRule::new(template)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        // 關鍵字代入時必定是逸出後的字面值,先試編一次即可擋下壞樣板
        self.match_rule().compile("probe")?;
        Ok(())
    }
}
