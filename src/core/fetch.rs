use reqwest::Client;
use url::Url;

/// 抓取單一來源頁面
///
/// 抓不到或讀不懂的頁面一律回傳 None 並留下紀錄,
/// 讓整體流程不因個別來源失敗而中斷。
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, source: &str) -> Option<String> {
        let url = match Url::parse(source) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("🔶 Skipping '{}': invalid URL ({})", source, e);
                return None;
            }
        };

        if url.scheme() != "http" && url.scheme() != "https" {
            tracing::warn!(
                "🔶 Skipping '{}': unsupported scheme '{}'",
                source,
                url.scheme()
            );
            return None;
        }

        tracing::debug!("📡 Fetching {}", source);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("🔶 Skipping '{}': request failed ({})", source, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("🔶 Skipping '{}': HTTP status {}", source, status);
            return None;
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("🔶 Skipping '{}': failed to read body ({})", source, e);
                return None;
            }
        };

        // 嚴格的 UTF-8 解碼,解不開就跳過這個來源
        match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("🔶 Skipping '{}': body is not valid UTF-8 ({})", source, e);
                None
            }
        }
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
