// アイテム供給元
// Producer が読み出す有限ストリームの実装群

pub mod json_file;
pub mod memory;
pub mod mock_stream;

// 公開API
pub use json_file::JsonFileSource;
pub use memory::VecSource;
pub use mock_stream::{mock_tweets, MockStream};
