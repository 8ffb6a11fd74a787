//! CLI 配置
//!
//! 包含 CLI 特有的配置：项目配置文件加载和日志级别组合

use std::path::{Path, PathBuf};

use lexa_config::{LexaConfig, LogLevel};
use tracing::Level;

use crate::CliError;

/// 未指定 `--config` 时尝试的文件
pub const DEFAULT_CONFIG_FILE: &str = "lexa.json";

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    /// 核心扫描器日志；`None` 表示不创建核心 logger
    pub core: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            core: None,
        }
    }
}

impl LogConfig {
    pub fn from_level(level: Option<LogLevel>) -> Self {
        match level {
            Some(level) => Self {
                global: to_tracing_level(level),
                core: Some(to_tracing_level(level)),
            },
            None => Self::default(),
        }
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "lexa::core" => self.core.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

pub fn to_core_level(level: LogLevel) -> lexa_log::Level {
    match level {
        LogLevel::Error => lexa_log::Level::Error,
        LogLevel::Warn => lexa_log::Level::Warn,
        LogLevel::Info => lexa_log::Level::Info,
        LogLevel::Debug => lexa_log::Level::Debug,
        LogLevel::Trace => lexa_log::Level::Trace,
    }
}

/// Load the project config
///
/// An explicit path must exist; the default file is optional.
pub fn load(explicit: Option<&Path>) -> Result<(LexaConfig, Option<PathBuf>), CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok((LexaConfig::default(), None));
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| CliError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let config = LexaConfig::from_json(&content).map_err(|source| CliError::ParseConfig {
        path: path.clone(),
        source,
    })?;
    Ok((config, Some(path)))
}
