// JSONファイルからアイテム列を読み込む供給元
//
// 形式: [{"username": "...", "text": "..."}, ...]

use super::memory::VecSource;
use crate::core::{ItemSource, PipelineError, PipelineResult, Tweet};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    inner: VecSource,
}

impl JsonFileSource {
    /// ファイル全体を読み込んで解析する
    pub async fn load(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref().to_path_buf();

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PipelineError::source_load(&path, anyhow::anyhow!("読み込みエラー: {e}")))?;

        let tweets: Vec<Tweet> = serde_json::from_str(&content)
            .map_err(|e| PipelineError::source_load(&path, anyhow::anyhow!("JSON解析エラー: {e}")))?;

        tracing::debug!(path = %path.display(), count = tweets.len(), "loaded items");

        Ok(Self {
            path,
            inner: VecSource::new(tweets),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }
}

#[async_trait]
impl ItemSource for JsonFileSource {
    async fn next(&mut self) -> Option<Tweet> {
        self.inner.next().await
    }
}
