// 設定管理の具象実装

use crate::core::{PipelineConfig, PipelineError, PipelineResult};
use std::time::Duration;

/// モックストリームの1件あたりの取得遅延
pub const DEFAULT_SOURCE_LATENCY: Duration = Duration::from_millis(320);
/// 分類1件あたりの擬似処理時間
pub const DEFAULT_WORK_DELAY: Duration = Duration::from_millis(330);
/// デフォルトのキーワード
pub const DEFAULT_KEYWORDS: [&str; 2] = ["golang", "gopher"];

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPipelineConfig {
    channel_capacity: usize,
    source_latency: Duration,
    work_delay: Duration,
    worker_threads: usize,
    keywords: Vec<String>,
}

impl DefaultPipelineConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            channel_capacity: 1,
            source_latency: DEFAULT_SOURCE_LATENCY,
            work_delay: DEFAULT_WORK_DELAY,
            worker_threads: cpu_count.max(2),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// 遅延なしの設定（テスト・ベンチマーク用）
    pub fn immediate() -> Self {
        Self::default()
            .with_source_latency(Duration::ZERO)
            .with_work_delay(Duration::ZERO)
    }

    pub fn with_channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.channel_capacity = channel_capacity;
        self
    }

    pub fn with_source_latency(mut self, source_latency: Duration) -> Self {
        self.source_latency = source_latency;
        self
    }

    pub fn with_work_delay(mut self, work_delay: Duration) -> Self {
        self.work_delay = work_delay;
        self
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> PipelineResult<()> {
        validate_config(self)
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    fn source_latency(&self) -> Duration {
        self.source_latency
    }

    fn work_delay(&self) -> Duration {
        self.work_delay
    }

    fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    fn keywords(&self) -> Vec<String> {
        self.keywords.clone()
    }
}

/// 任意の `PipelineConfig` 実装を検証
///
/// tokio の mpsc は容量0を受け付けず、ランタイムはスレッド0を受け付けない
pub fn validate_config<C>(config: &C) -> PipelineResult<()>
where
    C: PipelineConfig + ?Sized,
{
    if config.channel_capacity() == 0 {
        return Err(PipelineError::configuration(
            "チャンネル容量は1以上である必要があります",
        ));
    }

    if config.worker_threads() == 0 {
        return Err(PipelineError::configuration(
            "ワーカースレッド数は1以上である必要があります",
        ));
    }

    if config.keywords().iter().all(|k| k.trim().is_empty()) {
        return Err(PipelineError::configuration(
            "キーワードを1つ以上指定する必要があります",
        ));
    }

    Ok(())
}
