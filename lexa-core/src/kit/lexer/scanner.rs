//! Scanner trait 定义
//!
//! 每种 token 形状一个自动机，全部实现此 trait。自动机本身不持有状态，
//! 累积的文本放在 `scan` 的局部变量里，结果连同游标最终位置一起返回。

use std::sync::Arc;

use super::core::{Cursor, SourcePosition};
use super::error::ScanError;
use lexa_config::Shape;
use lexa_log::{debug, Logger};

/// 扫描结果
pub type ScanResult<T> = Result<T, ScanError>;

/// 成功扫描的值和游标最终位置
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned<T> {
    pub value: T,
    /// 最后一次读取（即 EOF）的位置
    pub position: SourcePosition,
}

impl<T> Scanned<T> {
    pub fn map<U, F>(self, f: F) -> Scanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Scanned {
            value: f(self.value),
            position: self.position,
        }
    }

    /// 总读取次数，等于字符数 + 1（EOF）
    pub fn reads(&self) -> usize {
        self.position.index
    }
}

/// 单形状扫描器
///
/// `scan` 必须消费完整输入：token 主体之后只接受 EOF。
pub trait Scanner {
    /// 结果类型
    type Output;
    /// 对应的形状
    const SHAPE: Shape;

    /// 驱动游标直到接受或拒绝
    ///
    /// 游标必须是新建的；第一次读取由实现负责。
    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<Self::Output>;

    fn scan_str(&self, input: &str) -> ScanResult<Scanned<Self::Output>> {
        self.scan_str_with_logger(input, Logger::noop())
    }

    fn scan_str_with_logger(
        &self,
        input: &str,
        logger: Arc<Logger>,
    ) -> ScanResult<Scanned<Self::Output>> {
        let span = logger.enter_span(Self::SHAPE.as_str());
        debug!(logger, "scanning {} over {:?}", Self::SHAPE, input);

        let mut cursor = Cursor::with_logger(input, Arc::clone(&logger));
        let result = self.scan(&mut cursor);
        match &result {
            Ok(_) => debug!(logger, "{} accepted after {} reads", Self::SHAPE, cursor.index()),
            Err(e) => debug!(
                logger,
                "{} rejected at {}: {}",
                Self::SHAPE,
                e.index(),
                e.kind
            ),
        }
        drop(span);

        let position = cursor.position();
        result.map(|value| Scanned { value, position })
    }
}

/// 字符分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if is_letter(c) {
            CharClass::Letter
        } else if is_digit(c) {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// 字母：Unicode 字母类
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// 数字：仅 ASCII 0-9
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// 标识符后续字符
pub fn is_identifier_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

/// 连续接受满足谓词的字符，追加到 `text`
pub(crate) fn take_while(cursor: &mut Cursor<'_>, text: &mut String, pred: impl Fn(char) -> bool) {
    while let Some(c) = cursor.current().filter(|&c| pred(c)) {
        text.push(c);
        cursor.advance();
    }
}
