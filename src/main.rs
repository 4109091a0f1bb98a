use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vocab_quiz::Quiz;

const DEFAULT_LOG_FILTER: &str = "vocab_quiz=info";
const DEFAULT_LOG_FILE_NAME: &str = "vocab-quiz.log";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to write logs to; the terminal itself is taken over by the quiz
    #[arg(long, value_name = "PATH", default_value_os_t = default_log_file())]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME)
}

/// Open (or create) the log file, creating its directory if needed.
fn open_log_file(path: &Path) -> Result<RollingFileAppender, InitError> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
}

/// Install the global subscriber. The returned guard flushes logs when dropped.
fn init_logging(path: &Path) -> Result<WorkerGuard, InitError> {
    let (file_writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Ok(guard)
}

fn main() {
    let args = Args::parse();

    let log_guard = match init_logging(&args.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error initializing log file: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Quiz::builtin().and_then(Quiz::run) {
        tracing::error!(error = %e, "quiz aborted");
        eprintln!("Error running quiz: {}", e);
        // Flush pending log lines before exiting.
        drop(log_guard);
        std::process::exit(1);
    }
}
