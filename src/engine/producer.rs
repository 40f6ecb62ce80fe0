// Producer - アイテム配信機能

use crate::core::{CompletionSignal, ItemSource, ProducerReport, Tweet};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Producer: 供給元からアイテムを引き出して Consumer へ渡す
///
/// 終端に達したら完了シグナルを1回だけ送り、アイテム送信側をドロップして終了する。
/// 完了シグナルの送信側は `send` で消費されるため、2回目の送信は型レベルで起こり得ない。
pub fn spawn_producer<S>(
    mut source: S,
    item_tx: mpsc::Sender<Tweet>,
    done_tx: oneshot::Sender<CompletionSignal>,
) -> tokio::task::JoinHandle<ProducerReport>
where
    S: ItemSource + 'static,
{
    tokio::spawn(async move {
        info!("producer started");
        let mut items_produced = 0;

        while let Some(tweet) = source.next().await {
            debug!(username = %tweet.username, "handing off item");
            if item_tx.send(tweet).await.is_err() {
                // 受信側が閉じられた場合はそれ以上生成しない
                warn!(items_produced, "item receiver dropped, stopping producer");
                break;
            }
            items_produced += 1;
        }

        if done_tx.send(CompletionSignal { items_produced }).is_err() {
            debug!("completion receiver already gone");
        }
        // item_txをドロップしてチャンネル終了シグナル
        drop(item_tx);

        info!(items_produced, "producer finished");
        ProducerReport { items_produced }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockItemSource;
    use crate::source::VecSource;
    use mockall::Sequence;
    use tokio::time::{timeout, Duration};

    fn scenario_tweets() -> Vec<Tweet> {
        vec![
            Tweet::new("alice", "I love golang"),
            Tweet::new("bob", "cats are great"),
            Tweet::new("carol", "go routines rock"),
        ]
    }

    #[tokio::test]
    async fn test_producer_sends_all_items_then_signal() {
        let (item_tx, mut item_rx) = mpsc::channel::<Tweet>(10);
        let (done_tx, done_rx) = oneshot::channel();

        let producer_handle = spawn_producer(VecSource::new(scenario_tweets()), item_tx, done_tx);

        // 全アイテムを受信
        let mut received = Vec::new();
        while let Ok(Some(tweet)) = timeout(Duration::from_millis(100), item_rx.recv()).await {
            received.push(tweet);
        }

        let report = producer_handle.await.unwrap();
        let signal = done_rx.await.unwrap();

        assert_eq!(received, scenario_tweets());
        assert_eq!(report.items_produced, 3);
        assert_eq!(signal.items_produced, 3);
    }

    #[tokio::test]
    async fn test_producer_empty_source() {
        let (item_tx, mut item_rx) = mpsc::channel::<Tweet>(1);
        let (done_tx, done_rx) = oneshot::channel();

        let producer_handle = spawn_producer(VecSource::default(), item_tx, done_tx);

        // チャンネルが即座に閉じることを確認
        assert!(item_rx.recv().await.is_none());
        assert_eq!(done_rx.await.unwrap().items_produced, 0);
        assert_eq!(producer_handle.await.unwrap().items_produced, 0);
    }

    #[tokio::test]
    async fn test_producer_signals_only_after_last_item_is_enqueued() {
        // 容量1: 最後のアイテムがチャンネルに入るまで完了シグナルは送られない
        let (item_tx, mut item_rx) = mpsc::channel::<Tweet>(1);
        let (done_tx, mut done_rx) = oneshot::channel();

        let producer_handle = spawn_producer(VecSource::new(scenario_tweets()), item_tx, done_tx);

        let first = item_rx.recv().await.unwrap();
        assert_eq!(first.username, "alice");
        tokio::task::yield_now().await;
        assert!(done_rx.try_recv().is_err());

        assert_eq!(item_rx.recv().await.unwrap().username, "bob");
        assert_eq!(item_rx.recv().await.unwrap().username, "carol");
        assert!(item_rx.recv().await.is_none());

        assert_eq!(done_rx.await.unwrap().items_produced, 3);
        producer_handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_producer_channel_closed_early() {
        let (item_tx, item_rx) = mpsc::channel::<Tweet>(1);
        let (done_tx, done_rx) = oneshot::channel();

        // 受信側を即座に閉じる
        drop(item_rx);

        let producer_handle = spawn_producer(VecSource::new(scenario_tweets()), item_tx, done_tx);

        // Producerはエラーなく終了し、完了シグナルも送る
        let report = producer_handle.await.unwrap();
        assert_eq!(report.items_produced, 0);
        assert_eq!(done_rx.await.unwrap().items_produced, 0);
    }

    #[tokio::test]
    async fn test_producer_stops_calling_source_after_exhaustion() {
        let mut mock_source = MockItemSource::new();
        let mut seq = Sequence::new();

        mock_source
            .expect_next()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Some(Tweet::new("alice", "golang")));
        mock_source
            .expect_next()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| None);

        let (item_tx, mut item_rx) = mpsc::channel::<Tweet>(4);
        let (done_tx, _done_rx) = oneshot::channel();

        let report = spawn_producer(mock_source, item_tx, done_tx).await.unwrap();

        assert_eq!(report.items_produced, 1);
        assert_eq!(item_rx.recv().await.unwrap().username, "alice");
        assert!(item_rx.recv().await.is_none());
    }
}
