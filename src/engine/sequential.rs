// 逐次実行版 - 比較用のベースライン
// 取得・処理・出力を1タスク上で交互に行う

use crate::core::{
    elapsed_millis, Classification, Classifier, ItemSource, PipelineConfig, PipelineResult,
    PipelineSummary, ReportSink, RunMode,
};
use chrono::Utc;
use tokio::time::Instant;
use tracing::info;

/// 供給元が尽きるまで逐次に処理する
pub async fn run_sequential<S, C, P, R>(
    mut source: S,
    classifier: &C,
    config: &P,
    sink: &R,
) -> PipelineResult<PipelineSummary>
where
    S: ItemSource,
    C: Classifier + ?Sized,
    P: PipelineConfig + ?Sized,
    R: ReportSink + ?Sized,
{
    let started_at = Utc::now();
    let start_time = Instant::now();
    let work_delay = config.work_delay();

    let mut items = 0;
    let mut matched = 0;

    while let Some(tweet) = source.next().await {
        if !work_delay.is_zero() {
            tokio::time::sleep(work_delay).await;
        }

        let is_match = classifier.matches(&tweet);
        sink.report_classification(&Classification::new(tweet.username, is_match))
            .await;

        items += 1;
        if is_match {
            matched += 1;
        }
    }

    let elapsed = start_time.elapsed();
    sink.report_elapsed(elapsed).await;
    let elapsed_ms = elapsed_millis(elapsed);
    info!(items, elapsed_ms, "sequential run finished");

    Ok(PipelineSummary {
        mode: RunMode::Sequential,
        started_at,
        items_produced: items,
        items_consumed: items,
        matched,
        elapsed_ms,
    })
}
