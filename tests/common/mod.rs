//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use lexa::lexa_log::{Level, LogConfig, LogRingBuffer};
use lexa::{run, LexaError, RunConfig, ScanOutput, Shape};

/// 用默认配置扫描
pub fn scan(shape: Shape, input: &str) -> Result<ScanOutput, LexaError> {
    run(shape, input, &RunConfig::default())
}

/// 扫描并返回诊断文本（预期失败）
pub fn diagnostic(shape: Shape, input: &str) -> String {
    match scan(shape, input) {
        Ok(output) => panic!("{shape} accepted {input:?} as {}", output.value),
        Err(e) => e.to_string(),
    }
}

/// 带环形缓冲日志的运行配置
pub fn logged_config(level: Level, show_steps: bool) -> (RunConfig, Arc<LogRingBuffer>) {
    let (logger, ring) = LogConfig::new(level).with_ring_buffer(1024).init();
    let config = RunConfig {
        show_steps,
        logger,
        ..RunConfig::default()
    };
    (config, ring.expect("ring buffer output configured"))
}
