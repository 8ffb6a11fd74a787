//! 源代码位置追踪
//!
//! - index: 读取次数（含末尾的 EOF 读取），1-based，诊断里的插入符按它对齐
//! - line/column: 人类可读的行列号（1-based，Unicode 码点计数）

use serde::Serialize;

/// 一次读取所在的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SourcePosition {
    /// 第几次读取，1-based；0 表示尚未读取
    pub index: usize,
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based
    pub column: usize,
}

impl SourcePosition {
    pub fn new(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
        }
    }

    /// 第一次读取之前
    pub fn before_start() -> Self {
        Self {
            index: 0,
            line: 1,
            column: 0,
        }
    }

    /// 第一个字符的位置
    pub fn start() -> Self {
        Self {
            index: 1,
            line: 1,
            column: 1,
        }
    }

    /// 越过字符 `c`，得到下一次读取的位置
    pub fn advance(&mut self, c: char) {
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// 越过 EOF（重复读取 EOF 时位置仍然前进）
    pub fn advance_past_end(&mut self) {
        self.index += 1;
        self.column += 1;
    }
}
