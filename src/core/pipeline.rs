use crate::core::fetch::PageFetcher;
use crate::core::report::{render, RenderConfig};
use crate::core::sources::SourceLines;
use crate::core::{ConfigProvider, MatchRule, Pipeline, SourceMatches, Storage};
use crate::utils::error::Result;

pub struct SummaryPipeline<S: Storage, C: ConfigProvider, M: MatchRule> {
    storage: S,
    config: C,
    rule: M,
    fetcher: PageFetcher,
    render_config: RenderConfig,
}

impl<S: Storage, C: ConfigProvider, M: MatchRule> SummaryPipeline<S, C, M> {
    pub fn new(storage: S, config: C, rule: M) -> Self {
        Self {
            storage,
            config,
            rule,
            fetcher: PageFetcher::new(),
            render_config: RenderConfig::default(),
        }
    }

    pub fn with_render_config(mut self, render_config: RenderConfig) -> Self {
        self.render_config = render_config;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: MatchRule> Pipeline for SummaryPipeline<S, C, M> {
    async fn collect(&self) -> Result<Vec<SourceMatches>> {
        let mut collected = Vec::new();
        let keyword = self.config.topic();

        let mut sources = SourceLines::open(self.config.source_file()).await?;

        // 依清單順序逐一處理,一次一個來源
        while let Some(source) = sources.next_source().await? {
            let page = match self.fetcher.fetch(&source).await {
                Some(page) => page,
                None => continue,
            };

            let fragments = self.rule.extract(&page, keyword)?;
            tracing::debug!("🔍 {} fragment(s) from {}", fragments.len(), source);

            // 沒有任何片段的來源不進報告
            if fragments.is_empty() {
                continue;
            }

            collected.push(SourceMatches {
                url: source,
                fragments,
            });
        }

        Ok(collected)
    }

    async fn render(&self, matches: Vec<SourceMatches>) -> Result<String> {
        tracing::debug!("Rendering report from {} source(s)", matches.len());
        Ok(render(&matches, &self.render_config))
    }

    async fn publish(&self, report: String) -> Result<String> {
        let file_name = format!("{}summary.txt", self.config.topic());
        let output_path = format!("{}/{}", self.config.output_dir(), file_name);

        tracing::debug!(
            "💾 Writing report ({} bytes) to {}",
            report.len(),
            output_path
        );
        self.storage.write_file(&file_name, report.as_bytes()).await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::RegexRule;
    use crate::utils::error::AggregatorError;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        source_file: String,
        topic: String,
        output_dir: String,
    }

    impl MockConfig {
        fn new(source_file: String, topic: &str) -> Self {
            Self {
                source_file,
                topic: topic.to_string(),
                output_dir: "test_output".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
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

    fn source_list(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    fn pipeline_for(
        source_file: &NamedTempFile,
        topic: &str,
    ) -> (
        MockStorage,
        SummaryPipeline<MockStorage, MockConfig, RegexRule>,
    ) {
        let storage = MockStorage::new();
        let config = MockConfig::new(
            source_file.path().to_str().unwrap().to_string(),
            topic,
        );
        let pipeline = SummaryPipeline::new(storage.clone(), config, RegexRule::default());
        (storage, pipeline)
    }

    #[tokio::test]
    async fn test_collect_gathers_matching_sources_in_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/a.html");
            then.status(200)
                .body("<p>widget intro</p><p>widget specs</p>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/b.html");
            then.status(200).body("<p>nothing relevant</p>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/c.html");
            then.status(200).body("<td>widget price</td>");
        });

        let file = source_list(&[
            &server.url("/a.html"),
            &server.url("/b.html"),
            &server.url("/c.html"),
        ]);
        let (_storage, pipeline) = pipeline_for(&file, "widget");

        let collected = pipeline.collect().await.unwrap();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].url, server.url("/a.html"));
        assert_eq!(collected[0].fragments, vec!["widget intro", "widget specs"]);
        assert_eq!(collected[1].url, server.url("/c.html"));
        assert_eq!(collected[1].fragments, vec!["widget price"]);
    }

    #[tokio::test]
    async fn test_collect_skips_unreachable_sources() {
        let server = MockServer::start();
        let good_mock = server.mock(|when, then| {
            when.method(GET).path("/good.html");
            then.status(200).body("<p>widget works</p>");
        });

        let file = source_list(&[
            "http://127.0.0.1:1/unreachable",
            "not a url at all",
            &server.url("/good.html"),
        ]);
        let (_storage, pipeline) = pipeline_for(&file, "widget");

        let collected = pipeline.collect().await.unwrap();

        good_mock.assert();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].url, server.url("/good.html"));
    }

    #[tokio::test]
    async fn test_collect_counts_duplicate_sources_separately() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/dup.html");
            then.status(200).body("<p>widget again</p>");
        });

        let url = server.url("/dup.html");
        let file = source_list(&[&url, &url]);
        let (_storage, pipeline) = pipeline_for(&file, "widget");

        let collected = pipeline.collect().await.unwrap();

        page_mock.assert_hits(2);
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0], collected[1]);
    }

    #[tokio::test]
    async fn test_collect_ignores_blank_lines() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/a.html");
            then.status(200).body("<p>widget here</p>");
        });

        let file = source_list(&["", &server.url("/a.html"), ""]);
        let (_storage, pipeline) = pipeline_for(&file, "widget");

        let collected = pipeline.collect().await.unwrap();

        assert_eq!(collected.len(), 1);
    }

    #[tokio::test]
    async fn test_collect_missing_source_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let storage = MockStorage::new();
        let config = MockConfig::new(missing.to_str().unwrap().to_string(), "widget");
        let pipeline = SummaryPipeline::new(storage, config, RegexRule::default());

        let result = pipeline.collect().await;

        assert!(matches!(
            result,
            Err(AggregatorError::SourceListError { .. })
        ));
    }

    #[tokio::test]
    async fn test_collect_propagates_broken_rule() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/a.html");
            then.status(200).body("<p>widget</p>");
        });

        let file = source_list(&[&server.url("/a.html")]);
        let storage = MockStorage::new();
        let config = MockConfig::new(file.path().to_str().unwrap().to_string(), "widget");
        let pipeline = SummaryPipeline::new(storage, config, RegexRule::new(">({keyword}"));

        let result = pipeline.collect().await;

        assert!(matches!(result, Err(AggregatorError::PatternError { .. })));
    }

    #[tokio::test]
    async fn test_render_formats_collected_matches() {
        let file = source_list(&[]);
        let (_storage, pipeline) = pipeline_for(&file, "widget");

        let matches = vec![SourceMatches {
            url: "http://a.example".to_string(),
            fragments: vec!["one".to_string(), "two".to_string()],
        }];

        let report = pipeline.render(matches).await.unwrap();

        assert!(report.starts_with("Source url: http://a.example\n\none\ntwo\n"));
        assert!(report.ends_with("\n\n"));
    }

    #[tokio::test]
    async fn test_render_empty_collection_is_empty_report() {
        let file = source_list(&[]);
        let (_storage, pipeline) = pipeline_for(&file, "widget");

        let report = pipeline.render(Vec::new()).await.unwrap();

        assert_eq!(report, "");
    }

    #[tokio::test]
    async fn test_publish_writes_report_named_after_topic() {
        let file = source_list(&[]);
        let (storage, pipeline) = pipeline_for(&file, "widget");

        let output_path = pipeline.publish("report body".to_string()).await.unwrap();

        assert_eq!(output_path, "test_output/widgetsummary.txt");
        let saved = storage.get_file("widgetsummary.txt").await;
        assert_eq!(saved, Some(b"report body".to_vec()));
    }

    #[tokio::test]
    async fn test_publish_writes_empty_report() {
        let file = source_list(&[]);
        let (storage, pipeline) = pipeline_for(&file, "widget");

        pipeline.publish(String::new()).await.unwrap();

        let saved = storage.get_file("widgetsummary.txt").await;
        assert_eq!(saved, Some(Vec::new()));
    }
}
