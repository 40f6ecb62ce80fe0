// メモリ上のアイテム列をそのまま流す供給元

use crate::core::{ItemSource, Tweet};
use async_trait::async_trait;
use std::collections::VecDeque;

/// 遅延なしでアイテムを順に返す
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    tweets: VecDeque<Tweet>,
}

impl VecSource {
    pub fn new(tweets: impl IntoIterator<Item = Tweet>) -> Self {
        Self {
            tweets: tweets.into_iter().collect(),
        }
    }

    /// 残りのアイテム数
    pub fn remaining(&self) -> usize {
        self.tweets.len()
    }
}

#[async_trait]
impl ItemSource for VecSource {
    async fn next(&mut self) -> Option<Tweet> {
        self.tweets.pop_front()
    }
}
