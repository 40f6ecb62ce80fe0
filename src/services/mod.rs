// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod classification;
pub mod config;
pub mod monitoring;
pub mod persistence;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use classification::KeywordClassifier;
pub use config::{validate_config, DefaultPipelineConfig, PipelineConfigFile};
pub use monitoring::{ConsoleReportSink, MemoryReportSink};
pub use persistence::write_summary_json;
