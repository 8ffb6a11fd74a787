//! API 类型定义
//!
//! 扫描的输出类型。

use lexa_core::{Shape, TokenValue};
use serde::Serialize;

/// 扫描输出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOutput {
    /// 使用的形状
    pub shape: Shape,
    /// 结果值
    pub value: TokenValue,
    /// 读取次数（含 EOF）
    pub reads: usize,
    /// 规范文本；仅在 show_steps 时填充
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}
