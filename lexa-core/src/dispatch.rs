//! 按形状选择自动机

use std::sync::Arc;

use crate::automata::*;
use crate::kit::lexer::{ScanResult, Scanned, Scanner};
use crate::token::TokenValue;
use lexa_config::Shape;
use lexa_log::Logger;

/// 用指定形状扫描整个输入（不记录日志）
pub fn scan(shape: Shape, input: &str) -> ScanResult<Scanned<TokenValue>> {
    scan_with_logger(shape, input, Logger::noop())
}

pub fn scan_with_logger(
    shape: Shape,
    input: &str,
    logger: Arc<Logger>,
) -> ScanResult<Scanned<TokenValue>> {
    match shape {
        Shape::Integer => run(IntegerScanner, input, logger),
        Shape::NonzeroInteger => run(NonzeroIntegerScanner, input, logger),
        Shape::Identifier => run(IdentifierScanner, input, logger),
        Shape::LetterDigit => run(LetterDigitScanner, input, logger),
        Shape::LetterList => run(LetterListScanner, input, logger),
        Shape::DigitList => run(DigitListScanner, input, logger),
        Shape::LetterDigitGroup => run(LetterDigitGroupScanner, input, logger),
        Shape::Decimal => run(DecimalScanner, input, logger),
        Shape::QuotedString => run(QuotedStringScanner, input, logger),
        Shape::BlockComment => run(BlockCommentScanner, input, logger),
        Shape::IdentChain => run(IdentChainScanner, input, logger),
    }
}

fn run<S>(scanner: S, input: &str, logger: Arc<Logger>) -> ScanResult<Scanned<TokenValue>>
where
    S: Scanner,
    S::Output: Into<TokenValue>,
{
    scanner
        .scan_str_with_logger(input, logger)
        .map(|scanned| scanned.map(Into::into))
}
