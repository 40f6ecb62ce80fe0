// パイプラインのトレイト定義
// 外部コラボレーター（入力・分類・出力）と設定の抽象化インターフェース

use super::types::{Classification, Tweet};
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// アイテム供給元の抽象化トレイト
///
/// Producer からのみ呼ばれる。`None` はストリーム終端（StreamExhausted）を意味し、
/// 以降の呼び出しも `None` を返し続けること。
#[automock]
#[async_trait]
pub trait ItemSource: Send {
    /// 次のアイテムを取得
    async fn next(&mut self) -> Option<Tweet>;
}

// ItemSource for Box<dyn ItemSource>
#[async_trait]
impl ItemSource for Box<dyn ItemSource> {
    async fn next(&mut self) -> Option<Tweet> {
        self.as_mut().next().await
    }
}

/// 分類述語の抽象化トレイト
///
/// 副作用を持たない純粋な判定であること
#[automock]
pub trait Classifier: Send + Sync {
    fn matches(&self, tweet: &Tweet) -> bool;
}

/// 分類結果の出力先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// アイテム1件分の分類結果を出力
    async fn report_classification(&self, classification: &Classification);

    /// 全体の経過時間を出力
    async fn report_elapsed(&self, elapsed: Duration);
}

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// アイテムチャンネルの容量
    fn channel_capacity(&self) -> usize;

    /// モックストリームの1件あたりの取得遅延
    fn source_latency(&self) -> Duration;

    /// Consumer の1件あたりの擬似処理時間
    fn work_delay(&self) -> Duration;

    /// ランタイムのワーカースレッド数
    fn worker_threads(&self) -> usize;

    /// 分類に使うキーワード
    fn keywords(&self) -> Vec<String>;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn channel_capacity(&self) -> usize {
        self.as_ref().channel_capacity()
    }

    fn source_latency(&self) -> Duration {
        self.as_ref().source_latency()
    }

    fn work_delay(&self) -> Duration {
        self.as_ref().work_delay()
    }

    fn worker_threads(&self) -> usize {
        self.as_ref().worker_threads()
    }

    fn keywords(&self) -> Vec<String> {
        self.as_ref().keywords()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;
    use mockall::Sequence;

    #[tokio::test]
    async fn test_boxed_item_source_delegates() {
        let mut mock_source = MockItemSource::new();
        let mut seq = Sequence::new();

        mock_source
            .expect_next()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Some(Tweet::new("alice", "I love golang")));
        mock_source
            .expect_next()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| None);

        let mut source: Box<dyn ItemSource> = Box::new(mock_source);

        assert_eq!(source.next().await.unwrap().username, "alice");
        assert!(source.next().await.is_none());
    }

    #[test]
    fn test_boxed_pipeline_config_delegates() {
        let mut mock_config = MockPipelineConfig::new();

        mock_config.expect_channel_capacity().return_const(4usize);
        mock_config
            .expect_source_latency()
            .return_const(Duration::from_millis(320));
        mock_config
            .expect_work_delay()
            .return_const(Duration::from_millis(330));
        mock_config.expect_worker_threads().return_const(2usize);
        mock_config
            .expect_keywords()
            .returning(|| vec!["golang".to_string()]);

        let config: Box<dyn PipelineConfig> = Box::new(mock_config);

        assert_eq!(config.channel_capacity(), 4);
        assert_eq!(config.source_latency(), Duration::from_millis(320));
        assert_eq!(config.work_delay(), Duration::from_millis(330));
        assert_eq!(config.worker_threads(), 2);
        assert_eq!(config.keywords(), vec!["golang".to_string()]);
    }

    #[tokio::test]
    async fn test_report_sink_mock() {
        let mut mock_sink = MockReportSink::new();

        mock_sink
            .expect_report_classification()
            .with(eq(Classification::new("bob", false)))
            .times(1)
            .returning(|_| ());
        mock_sink
            .expect_report_elapsed()
            .times(1)
            .returning(|_| ());

        let sink_ref: &dyn ReportSink = &mock_sink;
        sink_ref
            .report_classification(&Classification::new("bob", false))
            .await;
        sink_ref.report_elapsed(Duration::from_secs(1)).await;
    }
}
