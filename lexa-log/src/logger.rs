//! 日志器实现

use crate::record::{Level, Record};
use crate::span::{Span, SpanId};
use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

/// 日志输出目标
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// 日志器
///
/// 不存在全局实例：调用方创建后以 `Arc<Logger>` 形式传给扫描器。
pub struct Logger {
    /// 当前日志级别（原子存储，可运行时调整）
    level: AtomicU8,
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
    /// 每个线程各自的嵌套 span 栈
    span_stacks: Mutex<HashMap<ThreadId, Vec<Span>>>,
    next_span_id: AtomicU64,
}

/// 锁中毒时继续使用内部数据，日志不应让调用方 panic
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
            span_stacks: Mutex::new(HashMap::new()),
            next_span_id: AtomicU64::new(1),
        })
    }

    /// 无输出的日志器（扫描器默认使用）
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }

    /// 链式添加输出目标
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        lock(&self.sinks).push(Box::new(sink));
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// 级别启用且至少有一个 sink 时才值得格式化消息
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level() && !lock(&self.sinks).is_empty()
    }

    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if level < self.level() {
            return;
        }

        let mut record = Record::new(level, target, message);
        if let Some(id) = self.current_span_id() {
            record = record.with_span(id.0);
        }

        for sink in lock(&self.sinks).iter() {
            sink.write(&record);
        }
    }

    /// 进入新的 span，守卫析构时弹出
    ///
    /// span 只对进入它的线程可见。
    pub fn enter_span(self: &Arc<Self>, name: &'static str) -> SpanGuard {
        let id = SpanId(self.next_span_id.fetch_add(1, Ordering::Relaxed));
        let thread = thread::current().id();
        lock(&self.span_stacks)
            .entry(thread)
            .or_default()
            .push(Span::new(id, name));

        SpanGuard {
            logger: Arc::clone(self),
            id,
            thread,
        }
    }

    /// 当前线程的 span 嵌套深度
    pub fn span_depth(&self) -> usize {
        lock(&self.span_stacks)
            .get(&thread::current().id())
            .map_or(0, Vec::len)
    }

    /// 当前线程最内层 span 的 ID
    pub fn current_span_id(&self) -> Option<SpanId> {
        lock(&self.span_stacks)
            .get(&thread::current().id())
            .and_then(|stack| stack.last())
            .map(|span| span.id)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sinks", &lock(&self.sinks).len())
            .field("span_depth", &self.span_depth())
            .finish()
    }
}

/// Span 守卫
pub struct SpanGuard {
    logger: Arc<Logger>,
    id: SpanId,
    thread: ThreadId,
}

impl SpanGuard {
    pub fn id(&self) -> SpanId {
        self.id
    }
}

impl Drop for SpanGuard {
    fn drop(&mut self) {
        let mut stacks = lock(&self.logger.span_stacks);
        if let Some(stack) = stacks.get_mut(&self.thread) {
            if let Some(pos) = stack.iter().rposition(|span| span.id == self.id) {
                stack.remove(pos);
            }
            if stack.is_empty() {
                stacks.remove(&self.thread);
            }
        }
    }
}

/// 转发到另一个 logger
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

/// 文件 sink（追加模式）
pub struct FileSink {
    file: Mutex<std::fs::File>,
}

impl FileSink {
    pub fn new(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn write(&self, record: &Record) {
        let mut file = lock(&self.file);
        // 写失败时丢弃该条日志
        let _ = writeln!(file, "{}", record.format());
    }
}
