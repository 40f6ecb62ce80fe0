// パイプラインで受け渡すデータ型定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 分類結果の文言（一致）
pub const MATCHED_PHRASE: &str = "tweets about golang";
/// 分類結果の文言（不一致）
pub const NOT_MATCHED_PHRASE: &str = "does not tweet about golang";

/// ストリームから流れてくる1件のアイテム
///
/// 生成後は変更されず、Producer から Consumer へ所有権ごと移動する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub username: String,
    pub text: String,
}

impl Tweet {
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
        }
    }
}

/// 1件分の分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub username: String,
    pub matched: bool,
}

impl Classification {
    pub fn new(username: impl Into<String>, matched: bool) -> Self {
        Self {
            username: username.into(),
            matched,
        }
    }

    pub fn phrase(&self) -> &'static str {
        if self.matched {
            MATCHED_PHRASE
        } else {
            NOT_MATCHED_PHRASE
        }
    }
}

// レポート出力の1行: `<username>\t<phrase>`
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.username, self.phrase())
    }
}

/// ストリーム終端の通知（1回だけ送られる）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSignal {
    pub items_produced: usize,
}

/// Producer 終了時の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProducerReport {
    pub items_produced: usize,
}

/// Consumer 終了時の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumerReport {
    pub items_consumed: usize,
    pub matched: usize,
    /// 完了シグナルで通知された生成件数（シグナルを受け取れた場合のみ）
    pub expected: Option<usize>,
}

impl ConsumerReport {
    /// 通知された件数を全て受信できたか
    pub fn is_fully_drained(&self) -> bool {
        self.expected
            .map_or(true, |expected| expected == self.items_consumed)
    }
}

/// 実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Concurrent,
    Sequential,
}

/// パイプライン実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub mode: RunMode,
    pub started_at: DateTime<Utc>,
    pub items_produced: usize,
    pub items_consumed: usize,
    pub matched: usize,
    pub elapsed_ms: u64,
}

impl PipelineSummary {
    pub fn not_matched(&self) -> usize {
        self.items_consumed - self.matched
    }
}

/// 経過時間をミリ秒に変換（u64 に収まらない場合は飽和）
pub fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
