// 分類機能
// アイテム本文に対する判定述語

pub mod keyword;

// 公開API
pub use keyword::KeywordClassifier;
