// 結果出力の具象実装

use crate::core::{Classification, ReportSink};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// 経過時間行の書式
pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Process took {elapsed:?}")
}

/// 標準出力への出力実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReportSink;

impl ConsoleReportSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportSink for ConsoleReportSink {
    async fn report_classification(&self, classification: &Classification) {
        println!("{classification}");
    }

    async fn report_elapsed(&self, elapsed: Duration) {
        println!("{}", elapsed_line(elapsed));
    }
}

/// メモリ内に行を蓄積する出力実装（テスト・ライブラリ利用向け）
///
/// クローンは同じバッファを共有する
#[derive(Debug, Default, Clone)]
pub struct MemoryReportSink {
    lines: Arc<Mutex<Vec<String>>>,
    classifications: Arc<Mutex<Vec<Classification>>>,
    elapsed: Arc<Mutex<Option<Duration>>>,
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 出力された全行（経過時間行を含む）
    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    /// 受け取った分類結果（到着順）
    pub fn classifications(&self) -> Vec<Classification> {
        lock(&self.classifications).clone()
    }

    /// 報告された経過時間
    pub fn elapsed(&self) -> Option<Duration> {
        *lock(&self.elapsed)
    }
}

// 出力中に別スレッドがパニックしても蓄積済みの行は読めるようにする
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ReportSink for MemoryReportSink {
    async fn report_classification(&self, classification: &Classification) {
        lock(&self.lines).push(classification.to_string());
        lock(&self.classifications).push(classification.clone());
    }

    async fn report_elapsed(&self, elapsed: Duration) {
        lock(&self.lines).push(elapsed_line(elapsed));
        *lock(&self.elapsed) = Some(elapsed);
    }
}
