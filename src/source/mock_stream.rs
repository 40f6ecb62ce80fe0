// 組み込みのツイートストリーム
// 取得ごとに遅延を入れて遅い上流を模擬する

use crate::core::{ItemSource, Tweet};
use crate::services::config::implementations::DEFAULT_SOURCE_LATENCY;
use async_trait::async_trait;
use std::time::Duration;

/// 組み込みのツイート列
pub fn mock_tweets() -> Vec<Tweet> {
    vec![
        Tweet::new(
            "davecheney",
            "#golang top tip: if your unit tests import any other package you wrote, including themselves, they're not unit tests.",
        ),
        Tweet::new(
            "beertocode",
            "Backend developer, doing frontend featuring the eternal struggle of centering something. #coding",
        ),
        Tweet::new(
            "ironzeb",
            "Re: Popularity of Golang in China: My thinking nowadays is that it had a lot to do with this book and author https://github.com/astaxie/build-web-application-with-golang",
        ),
        Tweet::new(
            "beertocode",
            "Looking forward to the #gopher meetup in Hsinchu tonight with @ironzeb!",
        ),
        Tweet::new(
            "vampirewalk666",
            "I just wrote a golang slack bot! It reports the state of github repository. #Slack #golang",
        ),
    ]
}

/// 遅延付きのストリーム
///
/// 終端の判定も含め、`next` の呼び出しごとに `latency` だけ待つ
#[derive(Debug, Clone)]
pub struct MockStream {
    tweets: Vec<Tweet>,
    pos: usize,
    latency: Duration,
}

impl MockStream {
    pub fn new(latency: Duration) -> Self {
        Self::with_tweets(mock_tweets(), latency)
    }

    pub fn with_tweets(tweets: Vec<Tweet>, latency: Duration) -> Self {
        Self {
            tweets,
            pos: 0,
            latency,
        }
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}

impl Default for MockStream {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_LATENCY)
    }
}

#[async_trait]
impl ItemSource for MockStream {
    async fn next(&mut self) -> Option<Tweet> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let tweet = self.tweets.get(self.pos).cloned()?;
        self.pos += 1;
        Some(tweet)
    }
}
