use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use oxquiz::{HttpQuizSource, JsonStatsStore, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the quiz backend
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// File the accuracy statistics are kept in
    #[arg(long, default_value = "quiz_stats.json")]
    stats_file: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing();

    let source = HttpQuizSource::new(args.api_url);
    let store = JsonStatsStore::new(args.stats_file);

    if let Err(e) = Quiz::new(source, store).run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

// Logs go to stderr so they stay out of the alternate screen buffer.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
