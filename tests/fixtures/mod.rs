// テストユーティリティ
// 統合テストで共有するデータとヘルパー

pub mod test_data;

// 公開API
pub use test_data::*;
