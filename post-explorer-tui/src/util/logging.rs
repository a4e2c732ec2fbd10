//! 文件日志

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "post-explorer.log";

/// 日志目录
fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("post-explorer")
}

/// 初始化日志，返回日志文件路径
///
/// 日志文件无法创建时不安装订阅者，应用照常运行。
pub fn init_logging() -> Option<PathBuf> {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("post-explorer: cannot create log directory {}: {e}", dir.display());
        return None;
    }

    let path = dir.join(LOG_FILE_NAME);
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("post-explorer: cannot open log file {}: {e}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init();

    if installed.is_err() {
        return None;
    }

    tracing::info!("Logging to {}", path.display());
    Some(path)
}
