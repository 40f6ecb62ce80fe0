// キーワード一致による分類

use crate::core::{Classifier, Tweet};
use crate::services::config::implementations::DEFAULT_KEYWORDS;

/// 本文にいずれかのキーワードを含むか判定する（大文字小文字は区別しない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    /// 空文字や空白のみのキーワードは全ての本文に一致してしまうため除外する
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl Classifier for KeywordClassifier {
    fn matches(&self, tweet: &Tweet) -> bool {
        let text = tweet.text.to_lowercase();
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}
