//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use lexa_config::{LexaConfig, OutputFormat};
use lexa_log::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Scan configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Output format requested by the caller
    pub format: OutputFormat,
    /// Whether to report shape and canonical form alongside the value
    pub show_steps: bool,
    /// Core logger (no-op by default)
    pub logger: Arc<Logger>,
}

impl RunConfig {
    /// Build from a project config, with an explicit logger
    pub fn from_config(config: &LexaConfig, logger: Arc<Logger>) -> Self {
        Self {
            format: config.format,
            show_steps: config.show_steps,
            logger,
        }
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("format", &self.format)
            .field("show_steps", &self.show_steps)
            .field("log_level", &self.logger.level())
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_steps: false,
            logger: Logger::noop(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Get global config, initializing it with `f` on first use
pub fn get_or_init(f: impl FnOnce() -> RunConfig) -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(f)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
