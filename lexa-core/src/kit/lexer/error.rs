//! 扫描错误
//!
//! 唯一的错误类型。渲染为三行诊断：原始输入、指向出错列的插入符、出错字符说明。

use std::fmt;

use super::core::SourcePosition;

/// 错误类型（只影响诊断第三行的措辞）
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// 当前字符不符合文法
    InvalidChar(char),
    /// token 主体尚未结束就遇到 EOF
    UnexpectedEnd,
    /// 数字合法但超出结果类型范围
    OutOfRange(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidChar(c) => write!(f, "Error in symbol {c}"),
            ErrorKind::UnexpectedEnd => write!(f, "Error in symbol <end of input>"),
            ErrorKind::OutOfRange(text) => {
                write!(f, "Error in symbol <end of input>: '{text}' is out of range")
            }
        }
    }
}

/// 扫描错误，包含结构化信息和渲染好的诊断
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ScanError {
    pub kind: ErrorKind,
    /// 出错的那次读取
    pub position: SourcePosition,
    /// 完整的原始输入
    pub input: String,
    /// 三行诊断
    pub message: String,
}

impl ScanError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, position: SourcePosition, input: &str) -> Self {
        let message = Self::render(&kind, position, input);
        Self {
            kind,
            position,
            input: input.to_string(),
            message,
        }
    }

    /// 第几次读取出错（1-based）
    pub fn index(&self) -> usize {
        self.position.index
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn diagnostic(&self) -> &str {
        &self.message
    }

    fn render(kind: &ErrorKind, position: SourcePosition, input: &str) -> String {
        let padding = " ".repeat(position.index.saturating_sub(1));
        format!("{input}\n{padding}^\n{kind}")
    }
}
