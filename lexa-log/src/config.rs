//! 日志配置
//!
//! 一次性描述级别和输出目标，`init()` 生成 logger。

use crate::logger::{FileSink, Logger};
use crate::{Level, LogRingBuffer};
use std::sync::Arc;

/// 日志输出目标
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// 文件路径（追加）
    File(String),
    /// 环形缓冲区容量
    RingBuffer(usize),
}

/// 日志配置
///
/// ```
/// use lexa_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(1000).init();
/// assert_eq!(logger.level(), Level::Debug);
/// assert!(ring.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// 指定级别，无输出
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// 测试：静默
    pub fn test() -> Self {
        Self::new(Level::Error)
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 生成 logger
    ///
    /// 返回 (logger, 最后一个环形缓冲区)。无法打开的日志文件会被跳过。
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            match output {
                OutputConfig::File(path) => {
                    if let Ok(sink) = FileSink::new(&path) {
                        logger.add_sink(sink);
                    }
                }
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}
