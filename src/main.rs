use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tweet_pipeline::{
    cli::{execute_run, resolve_config, Cli},
    core::PipelineConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG が優先、未指定なら -v の回数で決める
    // stdout は分類結果専用にするためログは stderr へ
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config(&cli)?;

    // ワーカースレッド数は設定から決まるためランタイムは手動で構築
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads())
        .enable_all()
        .build()?;

    runtime.block_on(execute_run(&cli, &config))?;
    Ok(())
}
