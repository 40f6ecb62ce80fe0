use std::fs;
use std::path::{Path, PathBuf};
use tweet_pipeline::{core::Tweet, services::DefaultPipelineConfig};

/// 基本シナリオ（キーワード "go"）
pub fn scenario_tweets() -> Vec<Tweet> {
    vec![
        Tweet::new("alice", "I love golang"),
        Tweet::new("bob", "cats are great"),
        Tweet::new("carol", "go routines rock"),
    ]
}

pub fn scenario_config() -> DefaultPipelineConfig {
    DefaultPipelineConfig::immediate().with_keywords(["go"])
}

/// 2件に1件が一致する大量データ
pub fn numbered_tweets(count: usize) -> Vec<Tweet> {
    (0..count)
        .map(|i| {
            let text = if i % 2 == 0 { "gopher gala" } else { "ferris says hi" };
            Tweet::new(format!("user{i:04}"), text)
        })
        .collect()
}

/// ツイート列をJSONファイルに書き出す
pub fn write_tweets_file(dir: &Path, tweets: &[Tweet]) -> PathBuf {
    let path = dir.join("tweets.json");
    fs::write(&path, serde_json::to_string_pretty(tweets).unwrap()).unwrap();
    path
}
