use crate::domain::model::SourceMatches;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_file(&self) -> &str;
    fn topic(&self) -> &str;
    fn output_dir(&self) -> &str;
}

/// 從文字中挑出與關鍵字相關的片段
pub trait MatchRule: Send + Sync {
    fn extract(&self, text: &str, keyword: &str) -> Result<Vec<String>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn collect(&self) -> Result<Vec<SourceMatches>>;
    async fn render(&self, matches: Vec<SourceMatches>) -> Result<String>;
    async fn publish(&self, report: String) -> Result<String>;
}
