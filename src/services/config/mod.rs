// 設定管理機能
// デフォルト設定、設定ファイル、検証

pub mod file;
pub mod implementations;

// 公開API
pub use file::PipelineConfigFile;
pub use implementations::{validate_config, DefaultPipelineConfig};
