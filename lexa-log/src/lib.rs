//! lexa-log - 结构化日志系统
//!
//! 为 Lexa 扫描器设计的轻量日志系统，特点：
//! - **显式传递**：无全局 logger，`Arc<Logger>` 通过参数传入扫描器
//! - **惰性格式化**：宏先检查级别，未启用时不分配字符串
//! - **可回放**：环形缓冲区保留最后 N 条日志，便于测试断言和崩溃转储
//!
//! # 快速开始
//!
//! ```
//! use lexa_log::{LogConfig, Level, debug};
//!
//! let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(100).init();
//! debug!(logger, "scanner ready");
//! assert_eq!(ring.unwrap().len(), 1);
//! ```

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;
mod span;

pub use config::{LogConfig, OutputConfig};
pub use logger::{FileSink, LogSink, Logger, SpanGuard};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};
pub use span::{Span, SpanId};

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// 日志系统错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 打开或写入日志文件失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 无法识别的级别名称
    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnknownLevel("loud".to_string()).to_string(),
            "Unknown log level 'loud'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }
}
