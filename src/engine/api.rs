// 高レベル公開API
// Pipeline を簡単に使用できるようにするための便利な関数

use super::{pipeline::Pipeline, sequential::run_sequential};
use crate::{
    core::{ItemSource, PipelineConfig, PipelineResult, PipelineSummary, ReportSink},
    services::{validate_config, ConsoleReportSink, KeywordClassifier},
    source::MockStream,
};
use std::sync::Arc;

/// 設定のキーワードで分類するパイプラインを作成
pub fn create_keyword_pipeline<P>(config: &P) -> Pipeline<KeywordClassifier>
where
    P: PipelineConfig + ?Sized,
{
    Pipeline::new(Arc::new(KeywordClassifier::new(config.keywords())))
}

/// 設定を検証してから並行パイプラインを実行
pub async fn run_with_config<S, P, R>(
    source: S,
    config: &P,
    sink: Arc<R>,
) -> PipelineResult<PipelineSummary>
where
    S: ItemSource + 'static,
    P: PipelineConfig + ?Sized,
    R: ReportSink + 'static,
{
    validate_config(config)?;
    create_keyword_pipeline(config).run(source, config, sink).await
}

/// 設定を検証してから逐次版を実行
pub async fn run_sequential_with_config<S, P, R>(
    source: S,
    config: &P,
    sink: &R,
) -> PipelineResult<PipelineSummary>
where
    S: ItemSource,
    P: PipelineConfig + ?Sized,
    R: ReportSink + ?Sized,
{
    validate_config(config)?;
    let classifier = KeywordClassifier::new(config.keywords());
    run_sequential(source, &classifier, config, sink).await
}

/// 組み込みストリームを標準出力へ流す
pub async fn run_mock_stream<P>(config: &P) -> PipelineResult<PipelineSummary>
where
    P: PipelineConfig + ?Sized,
{
    let source = MockStream::new(config.source_latency());
    run_with_config(source, config, Arc::new(ConsoleReportSink::new())).await
}
