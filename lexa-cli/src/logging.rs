//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现按目标过滤；核心 logger 的记录经
//! [`TracingSink`] 转发到同一个 subscriber，统一输出格式。

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use lexa_log::{FileSink, Level as CoreLevel, LogSink, Logger, Record};
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::LogConfig;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 使用指定格式和日志配置初始化日志系统
///
/// 日志写到 stderr，stdout 只留给扫描结果。
pub fn init(
    log_config: &LogConfig,
    format: LogFormat,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target("lexa::core", log_config.level_for("lexa::core"))
        .with_target("lexa::cli", log_config.global);

    tracing_subscriber::registry()
        .with(create_format_layer(format, io::stderr).with_filter(targets))
        .try_init()
}

/// 构建传给扫描器的核心 logger
///
/// 记录转发到 tracing；指定文件时再以 lexa-log 的行格式追加一份。
pub fn core_logger(
    level: Option<CoreLevel>,
    log_file: Option<&Path>,
) -> lexa_log::Result<Arc<Logger>> {
    if level.is_none() && log_file.is_none() {
        return Ok(Logger::noop());
    }

    let (logger, _) = lexa_log::LogConfig::new(level.unwrap_or(CoreLevel::Info)).init();
    if let Some(path) = log_file {
        logger.add_sink(FileSink::new(path)?);
    }
    Ok(logger.with_sink(TracingSink))
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 把核心 logger 的记录转成 `lexa::core` 目标下的 tracing 事件
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        let module = record.target;
        let span_id = record.span_id;
        let message = &record.message;
        match record.level {
            CoreLevel::Trace => {
                tracing::trace!(target: "lexa::core", module, span_id, "{message}")
            }
            CoreLevel::Debug => {
                tracing::debug!(target: "lexa::core", module, span_id, "{message}")
            }
            CoreLevel::Info => tracing::info!(target: "lexa::core", module, span_id, "{message}"),
            CoreLevel::Warn => tracing::warn!(target: "lexa::core", module, span_id, "{message}"),
            CoreLevel::Error => {
                tracing::error!(target: "lexa::core", module, span_id, "{message}")
            }
        }
    }
}
