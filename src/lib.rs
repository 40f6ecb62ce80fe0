// 階層化アーキテクチャ
pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod source;

pub use crate::core::{PipelineError, PipelineResult};
pub use engine::{run_sequential_with_config, run_with_config, Pipeline};
