use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::utils::error::{AggregatorError, Result};

/// 逐行讀取來源清單,一行一個位址
pub struct SourceLines<R: AsyncRead + Unpin> {
    lines: Lines<BufReader<R>>,
}

impl SourceLines<File> {
    pub async fn open(path: &str) -> Result<Self> {
        let file = File::open(path)
            .await
            .map_err(|source| AggregatorError::SourceListError {
                path: path.to_string(),
                source,
            })?;
        Ok(Self::new(file))
    }
}

impl<R: AsyncRead + Unpin> SourceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// 回傳下一個來源位址,清單讀完時回傳 None
    pub async fn next_source(&mut self) -> Result<Option<String>> {
        match self.lines.next_line().await? {
            Some(line) => Ok(Some(line.trim().to_string())),
            None => Ok(None),
        }
    }
}
