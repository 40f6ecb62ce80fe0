// 実行サマリーの永続化

pub mod summary;

// 公開API
pub use summary::write_summary_json;
