//! 单字符前瞻游标
//!
//! 每次扫描创建一个，扫描结束即丢弃。`current()` 返回 `None` 即 EOF 哨兵，
//! 与任何合法字符都不相同。

use std::str::Chars;
use std::sync::Arc;

use super::position::SourcePosition;
use crate::kit::lexer::error::{ErrorKind, ScanError};
use crate::kit::lexer::scanner::ScanResult;
use lexa_log::{trace, Logger};

/// 输入字符串上的游标
pub struct Cursor<'a> {
    input: &'a str,
    chars: Chars<'a>,
    /// 最近一次读到的字符；`None` 为 EOF（或尚未读取）
    current: Option<char>,
    /// 最近一次读取的位置
    position: SourcePosition,
    /// 下一次读取的位置
    next: SourcePosition,
    logger: Arc<Logger>,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_logger(input, Logger::noop())
    }

    pub fn with_logger(input: &'a str, logger: Arc<Logger>) -> Self {
        Self {
            input,
            chars: input.chars(),
            current: None,
            position: SourcePosition::before_start(),
            next: SourcePosition::start(),
            logger,
        }
    }

    /// 读取下一个字符
    ///
    /// 位置总是前进，包括读到 EOF 以及 EOF 之后的重复读取。
    pub fn advance(&mut self) -> Option<char> {
        self.position = self.next;
        self.current = self.chars.next();
        match self.current {
            Some(c) => self.next.advance(c),
            None => self.next.advance_past_end(),
        }
        trace!(self.logger, "read {:?} at {}", self.current, self.position.index);
        self.current
    }

    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 已读取次数
    pub fn index(&self) -> usize {
        self.position.index
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// 最近一次读取是否为 EOF
    pub fn is_at_end(&self) -> bool {
        self.position.index > 0 && self.current.is_none()
    }

    pub fn check(&self, expected: char) -> bool {
        self.current == Some(expected)
    }

    /// 当前字符满足谓词（EOF 永远不满足）
    pub fn check_with(&self, pred: impl Fn(char) -> bool) -> bool {
        self.current.is_some_and(pred)
    }

    /// 在当前位置构造错误：当前字符非法，或 EOF 来得太早
    pub fn fail(&self) -> ScanError {
        let kind = match self.current {
            Some(c) => ErrorKind::InvalidChar(c),
            None => ErrorKind::UnexpectedEnd,
        };
        self.fail_with(kind)
    }

    pub fn fail_with(&self, kind: ErrorKind) -> ScanError {
        ScanError::at(kind, self.position, self.input)
    }

    /// token 主体之后必须恰好是 EOF
    pub fn expect_end(&self) -> ScanResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.fail())
        }
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("input", &self.input)
            .field("current", &self.current)
            .field("position", &self.position)
            .finish()
    }
}
