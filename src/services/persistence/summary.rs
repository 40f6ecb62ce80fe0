// 実行サマリーのJSON書き出し

use crate::core::{PipelineError, PipelineResult, PipelineSummary};
use std::path::Path;

/// サマリーを整形済みJSONとして書き出す
///
/// 親ディレクトリが存在しない場合は作成し、既存ファイルは上書きする
pub async fn write_summary_json(
    path: impl AsRef<Path>,
    summary: &PipelineSummary,
) -> PipelineResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            PipelineError::persistence(anyhow::anyhow!("ディレクトリ作成エラー: {e}"))
        })?;
    }

    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| PipelineError::persistence(anyhow::anyhow!("JSON変換エラー: {e}")))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| PipelineError::persistence(anyhow::anyhow!("書き込みエラー: {e}")))?;

    tracing::info!(path = %path.display(), "summary written");
    Ok(())
}
