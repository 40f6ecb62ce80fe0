// 設定ファイル（JSON）の読み込み
//
// 全フィールド省略可能。指定された項目だけをデフォルト設定に上書きする。

use super::implementations::DefaultPipelineConfig;
use crate::core::{PipelineError, PipelineResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 設定ファイルの内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfigFile {
    pub channel_capacity: Option<usize>,
    pub source_latency_ms: Option<u64>,
    pub work_delay_ms: Option<u64>,
    pub worker_threads: Option<usize>,
    pub keywords: Option<Vec<String>>,
}

impl PipelineConfigFile {
    /// ファイルから読み込み
    ///
    /// ランタイム構築前に呼ばれるため同期I/Oを使う
    pub fn load(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::config_load(path, e.into()))?;

        Self::parse(&content).map_err(|e| PipelineError::config_load(path, e))
    }

    /// JSON文字列から解析
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).map_err(|e| anyhow::anyhow!("JSON解析エラー: {e}"))
    }

    /// 指定された項目を既存の設定に上書き
    pub fn apply(self, mut config: DefaultPipelineConfig) -> DefaultPipelineConfig {
        if let Some(capacity) = self.channel_capacity {
            config = config.with_channel_capacity(capacity);
        }
        if let Some(latency_ms) = self.source_latency_ms {
            config = config.with_source_latency(Duration::from_millis(latency_ms));
        }
        if let Some(delay_ms) = self.work_delay_ms {
            config = config.with_work_delay(Duration::from_millis(delay_ms));
        }
        if let Some(threads) = self.worker_threads {
            config = config.with_worker_threads(threads);
        }
        if let Some(keywords) = self.keywords {
            config = config.with_keywords(keywords);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PipelineConfig;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_file() {
        let file = PipelineConfigFile::parse(r#"{"channel_capacity": 8, "work_delay_ms": 10}"#)
            .unwrap();

        assert_eq!(file.channel_capacity, Some(8));
        assert_eq!(file.work_delay_ms, Some(10));
        assert_eq!(file.source_latency_ms, None);
        assert_eq!(file.keywords, None);
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result = PipelineConfigFile::parse(r#"{"batch_size": 50}"#);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("JSON解析エラー"));
    }

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let file = PipelineConfigFile {
            source_latency_ms: Some(0),
            keywords: Some(vec!["rust".to_string()]),
            ..Default::default()
        };

        let config = file.apply(DefaultPipelineConfig::new(4));

        assert_eq!(config.channel_capacity(), 1);
        assert_eq!(config.source_latency(), Duration::ZERO);
        assert_eq!(config.work_delay(), Duration::from_millis(330));
        assert_eq!(config.worker_threads(), 4);
        assert_eq!(config.keywords(), vec!["rust"]);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pipeline.json");
        std::fs::write(
            &config_path,
            r#"{"worker_threads": 3, "keywords": ["gopher"]}"#,
        )
        .unwrap();

        let file = PipelineConfigFile::load(&config_path).unwrap();

        assert_eq!(file.worker_threads, Some(3));
        assert_eq!(file.keywords, Some(vec!["gopher".to_string()]));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PipelineConfigFile::load("/nonexistent/pipeline.json");

        let error = result.unwrap_err();
        assert!(matches!(error, PipelineError::ConfigLoadError { .. }));
        assert!(error.to_string().contains("/nonexistent/pipeline.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.json");
        std::fs::write(&config_path, "{ not json").unwrap();

        let error = PipelineConfigFile::load(&config_path).unwrap_err();

        assert!(matches!(error, PipelineError::ConfigLoadError { .. }));
        assert!(error.to_string().contains("JSON解析エラー"));
    }
}
