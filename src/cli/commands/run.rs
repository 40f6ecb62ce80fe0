use crate::{
    cli::Cli,
    core::{ItemSource, PipelineConfig, PipelineResult, PipelineSummary},
    engine::{run_sequential_with_config, run_with_config},
    services::{write_summary_json, ConsoleReportSink, DefaultPipelineConfig, PipelineConfigFile},
    source::{JsonFileSource, MockStream},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// デフォルト → 設定ファイル → CLIフラグの順に設定を重ねる
pub fn resolve_config(cli: &Cli) -> PipelineResult<DefaultPipelineConfig> {
    let mut config = DefaultPipelineConfig::default();

    if let Some(path) = &cli.config {
        config = PipelineConfigFile::load(path)?.apply(config);
    }

    if let Some(capacity) = cli.capacity {
        config = config.with_channel_capacity(capacity);
    }
    if let Some(ms) = cli.source_latency_ms {
        config = config.with_source_latency(Duration::from_millis(ms));
    }
    if let Some(ms) = cli.work_delay_ms {
        config = config.with_work_delay(Duration::from_millis(ms));
    }
    if let Some(threads) = cli.threads {
        config = config.with_worker_threads(threads);
    }
    if !cli.keywords.is_empty() {
        config = config.with_keywords(cli.keywords.iter().cloned());
    }

    config.validate()?;
    Ok(config)
}

/// 実行コマンド本体
pub async fn execute_run(cli: &Cli, config: &DefaultPipelineConfig) -> Result<PipelineSummary> {
    let source: Box<dyn ItemSource> = match &cli.input {
        Some(path) => Box::new(JsonFileSource::load(path).await?),
        None => Box::new(MockStream::new(config.source_latency())),
    };

    info!(
        input = ?cli.input,
        channel_capacity = config.channel_capacity(),
        worker_threads = config.worker_threads(),
        sequential = cli.sequential,
        "starting run"
    );

    let summary = if cli.sequential {
        run_sequential_with_config(source, config, &ConsoleReportSink::new()).await?
    } else {
        run_with_config(source, config, Arc::new(ConsoleReportSink::new())).await?
    };

    if let Some(path) = &cli.summary {
        write_summary_json(path, &summary)
            .await
            .with_context(|| format!("サマリーを保存できません: {}", path.display()))?;
    }

    Ok(summary)
}
