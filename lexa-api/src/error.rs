//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

/// 扫描错误（结构化）
pub use lexa_core::kit::lexer::{ErrorKind, ScanError};

/// 未知形状名
pub use lexa_config::UnknownShape;

/// Lexa 错误类型
#[derive(Error, Debug, Clone)]
pub enum LexaError {
    /// 输入不符合形状（三行诊断）
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// 形状名无法识别
    #[error("{0}")]
    UnknownShape(#[from] UnknownShape),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

impl LexaError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            LexaError::Scan(e) => Some(e.line()),
            _ => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            LexaError::Scan(e) => Some(e.column()),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            LexaError::Scan(_) => "scan",
            LexaError::UnknownShape(_) | LexaError::Config(_) => "config",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，json 模式下序列化输出。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            LexaError::Scan(e) => ErrorReport {
                phase: "scan",
                line: Some(e.line()),
                column: Some(e.column()),
                error_kind: kind_name(&e.kind).to_string(),
                message: e.diagnostic().to_string(),
                details: Some(ErrorDetails::Position {
                    index: e.index(),
                    symbol: match e.kind {
                        ErrorKind::InvalidChar(c) => Some(c),
                        _ => None,
                    },
                }),
            },
            LexaError::UnknownShape(e) => ErrorReport {
                phase: "config",
                line: None,
                column: None,
                error_kind: "UnknownShape".to_string(),
                message: e.to_string(),
                details: None,
            },
            LexaError::Config(msg) => ErrorReport {
                phase: "config",
                line: None,
                column: None,
                error_kind: "ConfigError".to_string(),
                message: msg.clone(),
                details: None,
            },
        }
    }
}

fn kind_name(kind: &ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidChar(_) => "InvalidChar",
        ErrorKind::UnexpectedEnd => "UnexpectedEnd",
        ErrorKind::OutOfRange(_) => "OutOfRange",
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、脚本）可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: scan, config
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
    /// 额外详情
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// 错误额外详情
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ErrorDetails {
    /// 出错的读取序号和字符（EOF 时为空）
    Position { index: usize, symbol: Option<char> },
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error:\n{}", line, col, self.phase, self.message)
            }
            _ => write!(f, "[{}] error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        let last = self.message.lines().last().unwrap_or_default();
        format!("{}: {}", self.phase, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexa_core::SourcePosition;

    fn scan_error() -> LexaError {
        LexaError::Scan(ScanError::at(
            ErrorKind::InvalidChar('a'),
            SourcePosition::new(3, 1, 3),
            "12a",
        ))
    }

    #[test]
    fn test_scan_error_line_column() {
        let err = scan_error();
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.column(), Some(3));
        assert_eq!(err.phase(), "scan");
    }

    #[test]
    fn test_scan_error_display_is_diagnostic() {
        assert_eq!(scan_error().to_string(), "12a\n  ^\nError in symbol a");
    }

    #[test]
    fn test_unknown_shape_error() {
        let err: LexaError = UnknownShape("float".to_string()).into();
        assert_eq!(err.phase(), "config");
        assert_eq!(err.line(), None);
        assert_eq!(err.to_string(), "unknown shape 'float'");
    }

    #[test]
    fn test_config_error_to_report() {
        let report = LexaError::Config("bad json".to_string()).to_report();
        assert_eq!(report.phase, "config");
        assert_eq!(report.error_kind, "ConfigError");
        assert_eq!(report.to_string(), "[config] error: bad json");
    }

    #[test]
    fn test_scan_error_to_report() {
        let report = scan_error().to_report();
        assert_eq!(report.error_kind, "InvalidChar");
        assert_eq!(
            report.details,
            Some(ErrorDetails::Position {
                index: 3,
                symbol: Some('a')
            })
        );
        assert_eq!(report.to_short(), "scan: Error in symbol a");
        assert_eq!(
            report.to_string(),
            "[1:3] scan error:\n12a\n  ^\nError in symbol a"
        );
    }

    #[test]
    fn test_error_report_to_json() {
        let json = scan_error().to_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "scan");
        assert_eq!(value["line"], 1);
        assert_eq!(value["message"], "12a\n  ^\nError in symbol a");
        assert_eq!(value["details"]["type"], "position");
        assert_eq!(value["details"]["symbol"], "a");
    }

    #[test]
    fn test_error_report_to_json_null_values() {
        let json = LexaError::Config("x".into()).to_report().to_json().unwrap();
        assert!(json.contains(r#""line":null"#));
        assert!(!json.contains("details"));
    }
}
