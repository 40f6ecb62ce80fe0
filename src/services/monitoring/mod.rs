// 結果出力機能
// 分類結果と経過時間の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReportSink, MemoryReportSink};
