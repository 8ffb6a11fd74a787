//! 测试辅助工具
//!
//! 每个形状的合法样例，以及带环形缓冲的日志器

#![allow(dead_code)]

use std::sync::Arc;

use lexa_core::{scan, Shape, TokenValue};
use lexa_log::{Level, LogRingBuffer, Logger};

/// 各形状的合法输入
pub fn valid_samples(shape: Shape) -> &'static [&'static str] {
    match shape {
        Shape::Integer => &["123", "+123", "-0", "0042"],
        Shape::NonzeroInteger => &["123", "-12", "+9"],
        Shape::Identifier => &["abc123", "a", "snake_case_1"],
        Shape::LetterDigit => &["a", "a1", "b2c3d"],
        Shape::LetterList => &["a", "a,b,c", "x;y,z"],
        Shape::DigitList => &["1", "1 2 3", "0 0 9"],
        Shape::LetterDigitGroup => &["a", "ab", "ab12cd3"],
        Shape::Decimal => &["123", "123.4", "0.001"],
        Shape::QuotedString => &["'abc'", "''", "'it is'"],
        Shape::BlockComment => &["/* hi */", "/**/", "/* a * b / c */"],
        Shape::IdentChain => &["a", "std.io", "a1.b_2.c"],
    }
}

/// 合法输入加上一个看似合理、实则越界的字符
pub fn extended_samples(shape: Shape) -> &'static [(&'static str, char)] {
    match shape {
        Shape::Integer => &[("123", '+'), ("-0", '-')],
        Shape::NonzeroInteger => &[("123", '-'), ("+9", '+')],
        Shape::Identifier => &[("abc123", '.'), ("snake_case_1", '-')],
        Shape::LetterDigit => &[("a1", '2'), ("b2c3d", 'e')],
        Shape::LetterList => &[("a,b", 'c'), ("x;y,z", ',')],
        Shape::DigitList => &[("1 2 3", '4'), ("0 9", ' ')],
        Shape::LetterDigitGroup => &[("ab", 'c'), ("ab12", '3')],
        Shape::Decimal => &[("123.4", '.'), ("12", '-')],
        Shape::QuotedString => &[("'x'", '\''), ("'abc'", 'd')],
        Shape::BlockComment => &[("/**/", '/'), ("/* hi */", '*')],
        Shape::IdentChain => &[("a.b", '.'), ("std.io", '-')],
    }
}

/// 扫描一个预期合法的输入
pub fn scan_ok(shape: Shape, input: &str) -> TokenValue {
    match scan(shape, input) {
        Ok(scanned) => scanned.value,
        Err(e) => panic!("{shape} rejected {input:?}:\n{e}"),
    }
}

/// 扫描一个预期非法的输入，返回诊断文本
pub fn scan_err(shape: Shape, input: &str) -> String {
    match scan(shape, input) {
        Ok(scanned) => panic!("{shape} accepted {input:?} as {}", scanned.value),
        Err(e) => e.to_string(),
    }
}

/// Debug 级别、写入环形缓冲的日志器
pub fn capture_logger(capacity: usize) -> (Arc<Logger>, Arc<LogRingBuffer>) {
    let ring = LogRingBuffer::new(capacity);
    let logger = Logger::new(Level::Debug).with_sink(ring.clone());
    (logger, ring)
}
