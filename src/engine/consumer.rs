// Consumer - 分類ワーカー機能
//
// 状態遷移: Running -> Draining -> Terminated
// Running  : アイテムと完了シグナルを同時に待つ（アイテム優先）
// Draining : 完了シグナル受信後、チャンネルが閉じて空になるまで受信を続ける

use crate::core::{Classification, Classifier, CompletionSignal, ConsumerReport, ReportSink, Tweet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Consumer の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    Running,
    Draining,
    Terminated,
}

// Running 状態で待ち合わせる2種類のイベント
enum ConsumerEvent {
    Item(Option<Tweet>),
    Completion(Option<CompletionSignal>),
}

/// 単一Consumerワーカー
///
/// 終了条件は「アイテムチャンネルが閉じて空になったこと」。
/// 完了シグナルは Draining への遷移と件数の照合にのみ使う。
pub fn spawn_consumer<C, R>(
    classifier: Arc<C>,
    mut item_rx: mpsc::Receiver<Tweet>,
    mut done_rx: oneshot::Receiver<CompletionSignal>,
    sink: Arc<R>,
    work_delay: Duration,
) -> tokio::task::JoinHandle<ConsumerReport>
where
    C: Classifier + 'static,
    R: ReportSink + 'static,
{
    tokio::spawn(async move {
        info!("consumer started");
        let mut state = ConsumerState::Running;
        let mut report = ConsumerReport::default();

        loop {
            let next_state = match state {
                ConsumerState::Running => {
                    let event = tokio::select! {
                        biased;
                        received = item_rx.recv() => ConsumerEvent::Item(received),
                        signal = &mut done_rx => ConsumerEvent::Completion(signal.ok()),
                    };

                    match event {
                        ConsumerEvent::Item(Some(tweet)) => {
                            classify_and_report(
                                classifier.as_ref(),
                                sink.as_ref(),
                                tweet,
                                work_delay,
                                &mut report,
                            )
                            .await;
                            ConsumerState::Running
                        }
                        ConsumerEvent::Item(None) => {
                            // Producer はチャンネルを閉じる前にシグナルを送っている
                            report.expected = done_rx.try_recv().ok().map(|s| s.items_produced);
                            ConsumerState::Terminated
                        }
                        ConsumerEvent::Completion(Some(signal)) => {
                            debug!(items_produced = signal.items_produced, "completion observed");
                            report.expected = Some(signal.items_produced);
                            ConsumerState::Draining
                        }
                        ConsumerEvent::Completion(None) => {
                            warn!("completion sender dropped without a signal");
                            ConsumerState::Draining
                        }
                    }
                }
                ConsumerState::Draining => match item_rx.recv().await {
                    Some(tweet) => {
                        classify_and_report(
                            classifier.as_ref(),
                            sink.as_ref(),
                            tweet,
                            work_delay,
                            &mut report,
                        )
                        .await;
                        ConsumerState::Draining
                    }
                    None => ConsumerState::Terminated,
                },
                ConsumerState::Terminated => break,
            };

            if next_state != state {
                debug!(from = ?state, to = ?next_state, "consumer state transition");
            }
            state = next_state;
        }

        if !report.is_fully_drained() {
            warn!(
                expected = ?report.expected,
                consumed = report.items_consumed,
                "consumer received fewer items than produced"
            );
        }
        info!(
            items_consumed = report.items_consumed,
            matched = report.matched,
            "consumer finished"
        );
        report
    })
}

/// 1件分の擬似処理・分類・出力
async fn classify_and_report<C, R>(
    classifier: &C,
    sink: &R,
    tweet: Tweet,
    work_delay: Duration,
    report: &mut ConsumerReport,
) where
    C: Classifier + ?Sized,
    R: ReportSink + ?Sized,
{
    if !work_delay.is_zero() {
        tokio::time::sleep(work_delay).await;
    }

    let matched = classifier.matches(&tweet);
    let classification = Classification::new(tweet.username, matched);
    sink.report_classification(&classification).await;

    report.items_consumed += 1;
    if matched {
        report.matched += 1;
    }
}
