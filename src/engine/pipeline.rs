// Pipeline - Producer-Consumer パイプライン
// チャンネル構築、ワーカー起動、完了待ち、経過時間の報告

use super::{consumer::spawn_consumer, producer::spawn_producer};
use crate::core::{
    elapsed_millis, Classifier, CompletionSignal, ItemSource, PipelineConfig, PipelineError,
    PipelineResult, PipelineSummary, ReportSink, RunMode, Tweet,
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{info, warn};

/// 1回の実行ごとにチャンネルを作り直すパイプライン
pub struct Pipeline<C> {
    classifier: Arc<C>,
}

impl<C> Pipeline<C>
where
    C: Classifier + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// 供給元が尽きるまで実行
    ///
    /// Producer と Consumer を独立したタスクとして起動し、両方の JoinHandle を待つ。
    /// JoinHandle はタスクが戻るかパニックした時点で必ず解決する。
    pub async fn run<S, P, R>(
        &self,
        source: S,
        config: &P,
        sink: Arc<R>,
    ) -> PipelineResult<PipelineSummary>
    where
        S: ItemSource + 'static,
        P: PipelineConfig + ?Sized,
        R: ReportSink + 'static,
    {
        if config.channel_capacity() == 0 {
            return Err(PipelineError::configuration(
                "チャンネル容量は1以上である必要があります",
            ));
        }

        let started_at = Utc::now();
        let start_time = Instant::now();

        // Producer-Consumerチャンネル構築
        let (item_tx, item_rx) = mpsc::channel::<Tweet>(config.channel_capacity());
        let (done_tx, done_rx) = oneshot::channel::<CompletionSignal>();

        let producer_handle = spawn_producer(source, item_tx, done_tx);
        let consumer_handle = spawn_consumer(
            Arc::clone(&self.classifier),
            item_rx,
            done_rx,
            Arc::clone(&sink),
            config.work_delay(),
        );

        // 両ワーカーの完了を待機
        let (producer_result, consumer_result) = tokio::join!(producer_handle, consumer_handle);
        let producer_report =
            producer_result.map_err(|e| PipelineError::worker_panicked("producer", e))?;
        let consumer_report =
            consumer_result.map_err(|e| PipelineError::worker_panicked("consumer", e))?;

        if consumer_report.items_consumed != producer_report.items_produced {
            warn!(
                produced = producer_report.items_produced,
                consumed = consumer_report.items_consumed,
                "item counts differ"
            );
        }

        let elapsed = start_time.elapsed();
        sink.report_elapsed(elapsed).await;
        let elapsed_ms = elapsed_millis(elapsed);
        info!(elapsed_ms, "pipeline finished");

        Ok(PipelineSummary {
            mode: RunMode::Concurrent,
            started_at,
            items_produced: producer_report.items_produced,
            items_consumed: consumer_report.items_consumed,
            matched: consumer_report.matched,
            elapsed_ms,
        })
    }
}
