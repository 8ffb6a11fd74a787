//! Lexa API - scan orchestration layer
//!
//! Provides a unified scan interface, including:
//! - Shape resolution by name
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (LexaError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `run(shape, input, &config)` API.

use lexa_log::{debug, info};

// Re-export config
pub mod config;
pub use config::{
    config as get_config, get_or_init, init as init_config, is_initialized, RunConfig,
};

// Re-export config types from lexa_config
pub use lexa_config::{LexaConfig, LogLevel, OutputFormat, Shape, UnknownShape};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ErrorDetails, ErrorReport, LexaError};
pub use types::ScanOutput;

// Re-export core types
pub use lexa_config;
pub use lexa_core::{ScanError, TokenValue};

/// Scan with explicit configuration
///
/// This is the recommended API for library users.
pub fn run(shape: Shape, input: &str, config: &RunConfig) -> Result<ScanOutput, LexaError> {
    info!(config.logger, "Starting {} scan", shape);

    let scanned = lexa_core::scan_with_logger(shape, input, config.logger.clone())?;
    let canonical = config.show_steps.then(|| scanned.value.canonical_text());
    if let Some(text) = &canonical {
        debug!(config.logger, "canonical form: {:?}", text);
    }

    info!(config.logger, "Scan completed: {}", scanned.value);
    Ok(ScanOutput {
        shape,
        reads: scanned.reads(),
        value: scanned.value,
        canonical,
    })
}

/// Resolve a shape name, then scan
pub fn run_named(shape: &str, input: &str, config: &RunConfig) -> Result<ScanOutput, LexaError> {
    let shape: Shape = shape.parse()?;
    run(shape, input, config)
}

// ==================== Global config API ====================

/// Scan using the global config
///
/// # Panics
/// If global config is not initialized
pub fn scan(shape: Shape, input: &str) -> Result<ScanOutput, LexaError> {
    run(shape, input, get_config())
}

/// Quick scan with default config (auto-initializes if needed)
pub fn quick_scan(shape: Shape, input: &str) -> Result<ScanOutput, LexaError> {
    run(shape, input, get_or_init(RunConfig::default))
}
