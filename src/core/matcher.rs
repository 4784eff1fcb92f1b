use regex::{Regex, RegexBuilder};

use crate::domain::ports::MatchRule;
use crate::utils::error::{AggregatorError, Result};

/// 預設規則:擷取夾在標籤之間、包含完整關鍵字的那段文字
pub const DEFAULT_MATCH_TEMPLATE: &str = r">([^<>]*\b{keyword}\b[^<>]*)<";

/// 以規則樣板加上關鍵字組成的比對規則
///
/// 樣板中的 `{keyword}` 會被換成逸出後的關鍵字,
/// 所以關鍵字永遠是字面值,不會改變規則本身。
pub struct RegexRule {
    template: String,
}

impl RegexRule {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn compile(&self, keyword: &str) -> Result<Regex> {
        let pattern = self.template.replace("{keyword}", &regex::escape(keyword));
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| AggregatorError::PatternError {
                pattern,
                reason: e.to_string(),
            })
    }
}

impl Default for RegexRule {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_TEMPLATE)
    }
}

impl MatchRule for RegexRule {
    fn extract(&self, text: &str, keyword: &str) -> Result<Vec<String>> {
        let re = self.compile(keyword)?;

        // 有擷取群組時取群組內容,否則取整段符合的文字
        let fragments = re
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
            .collect();

        Ok(fragments)
    }
}
