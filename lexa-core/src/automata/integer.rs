//! 带符号整数：`[+-]?[0-9]+`

use crate::kit::lexer::scanner::take_while;
use crate::kit::lexer::{is_digit, Cursor, ErrorKind, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerScanner;

impl Scanner for IntegerScanner {
    type Output = i64;
    const SHAPE: Shape = Shape::Integer;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<i64> {
        let mut text = String::new();
        cursor.advance();
        take_sign(cursor, &mut text);

        // 符号之后至少一位数字
        if !cursor.check_with(is_digit) {
            return Err(cursor.fail());
        }
        take_while(cursor, &mut text, is_digit);

        cursor.expect_end()?;
        parse_integer(cursor, &text)
    }
}

/// 可选的前导 `+`/`-`
pub(crate) fn take_sign(cursor: &mut Cursor<'_>, text: &mut String) {
    if let Some(sign @ ('+' | '-')) = cursor.current() {
        text.push(sign);
        cursor.advance();
    }
}

/// 文本已经过文法校验，失败只可能是溢出
pub(crate) fn parse_integer(cursor: &Cursor<'_>, text: &str) -> ScanResult<i64> {
    text.parse::<i64>()
        .map_err(|_| cursor.fail_with(ErrorKind::OutOfRange(text.to_string())))
}
