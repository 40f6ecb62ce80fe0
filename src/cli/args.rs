use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tweet_pipeline")]
#[command(about = "Classify a tweet stream with a concurrent producer/consumer pipeline")]
#[command(version)]
pub struct Cli {
    /// JSON file with an array of {"username", "text"} objects (default: built-in stream)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Item channel capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Delay per item pulled from the built-in stream, in milliseconds
    #[arg(long)]
    pub source_latency_ms: Option<u64>,

    /// Simulated processing cost per item, in milliseconds
    #[arg(long)]
    pub work_delay_ms: Option<u64>,

    /// Number of runtime worker threads
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Keyword to match (repeatable, case-insensitive)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Run the single-task baseline instead of the concurrent pipeline
    #[arg(long)]
    pub sequential: bool,

    /// Write the run summary as JSON to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// ログフィルタ（RUST_LOG 未指定時に使う）
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
