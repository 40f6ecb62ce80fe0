// パイプライン専用のカスタムエラー型定義
//
// ストリーム終端(StreamExhausted)はエラーではなく `ItemSource::next` の `None` で表現する。
// ここに定義するのはモデル外の致命的な失敗のみ。

use std::path::PathBuf;
use thiserror::Error;

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("ワーカー異常終了: {worker} - {source}")]
    WorkerPanicked {
        worker: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("設定ファイル読み込みエラー: {} - {source}", path.display())]
    ConfigLoadError {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("入力ファイル読み込みエラー: {} - {source}", path.display())]
    SourceLoadError {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("永続化エラー: {source}")]
    PersistenceError {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    /// ワーカー異常終了エラーの作成
    pub fn worker_panicked(worker: &'static str, source: tokio::task::JoinError) -> Self {
        Self::WorkerPanicked { worker, source }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 設定ファイル読み込みエラーの作成
    pub fn config_load(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::ConfigLoadError {
            path: path.into(),
            source,
        }
    }

    /// 入力ファイル読み込みエラーの作成
    pub fn source_load(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::SourceLoadError {
            path: path.into(),
            source,
        }
    }

    /// 永続化エラーの作成
    pub fn persistence(source: anyhow::Error) -> Self {
        Self::PersistenceError { source }
    }

    /// 利用者が入力を直せば解消するエラーかどうか
    ///
    /// ワーカーの異常終了は不変条件違反なので常に false
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::WorkerPanicked { .. } => false,
            Self::ConfigurationError { .. }
            | Self::ConfigLoadError { .. }
            | Self::SourceLoadError { .. }
            | Self::PersistenceError { .. } => true,
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
