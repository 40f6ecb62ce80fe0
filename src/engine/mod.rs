// エンジン層 - 並行処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod consumer;
pub mod pipeline;
pub mod producer;
pub mod sequential;

// 公開API - 主要エンジンクラス
pub use api::{
    create_keyword_pipeline, run_mock_stream, run_sequential_with_config, run_with_config,
};
pub use consumer::{spawn_consumer, ConsumerState};
pub use pipeline::Pipeline;
pub use producer::spawn_producer;
pub use sequential::run_sequential;
