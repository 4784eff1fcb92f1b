use crate::domain::model::SourceMatches;

pub const DEFAULT_ENTRY_TEMPLATE: &str = "Source url: {url}\n\n{body}\n{separator}\n\n";

pub const DEFAULT_SEPARATOR: &str = "-------------------------------------------------";

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub entry_template: String,
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            entry_template: DEFAULT_ENTRY_TEMPLATE.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// 把收集結果排成一份報告,輸入為空時回傳空字串
pub fn render(matches: &[SourceMatches], config: &RenderConfig) -> String {
    let mut report = String::new();

    for entry in matches {
        let body = entry.fragments.join("\n");

        // 簡單的模板替換,抓回來的內容最後才代入
        let rendered = config
            .entry_template
            .replace("{separator}", &config.separator)
            .replace("{url}", &entry.url)
            .replace("{body}", body.trim_end());

        report.push_str(&rendered);
    }

    report
}
