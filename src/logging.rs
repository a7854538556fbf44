// src/logging.rs

use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// 启动 stderr 日志，每个进程只初始化一次。RUST_LOG 优先于传入的级别。
pub fn init_logging(level: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;
    let _ = LOGGER.set(handle);
    Ok(())
}
