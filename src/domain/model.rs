/// 單一來源貢獻的內容片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMatches {
    pub url: String,
    pub fragments: Vec<String>,
}
