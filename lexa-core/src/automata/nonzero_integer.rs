//! 首位非零的带符号整数：`[+-]?[1-9][0-9]*`
//!
//! 与 [`IntegerScanner`](super::IntegerScanner) 只共享符号处理。

use super::integer::{parse_integer, take_sign};
use crate::kit::lexer::scanner::take_while;
use crate::kit::lexer::{is_digit, Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct NonzeroIntegerScanner;

impl Scanner for NonzeroIntegerScanner {
    type Output = i64;
    const SHAPE: Shape = Shape::NonzeroInteger;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<i64> {
        let mut text = String::new();
        cursor.advance();
        take_sign(cursor, &mut text);

        match cursor.current() {
            Some(c) if is_digit(c) && c != '0' => {
                text.push(c);
                cursor.advance();
            }
            _ => return Err(cursor.fail()),
        }
        take_while(cursor, &mut text, is_digit);

        cursor.expect_end()?;
        parse_integer(cursor, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::ErrorKind;

    fn scan(input: &str) -> ScanResult<i64> {
        NonzeroIntegerScanner.scan_str(input).map(|s| s.value)
    }

    #[test]
    fn test_accepts() {
        assert_eq!(scan("123"), Ok(123));
        assert_eq!(scan("-12"), Ok(-12));
        assert_eq!(scan("+100"), Ok(100));
    }

    #[test]
    fn test_rejects_leading_zero() {
        for input in ["0", "00", "-0", "+012"] {
            let err = scan(input).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidChar('0'), "input {input:?}");
        }
    }

    #[test]
    fn test_rejects_trailing_content() {
        let err = scan("10x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChar('x'));
        assert_eq!(err.index(), 3);
    }

    #[test]
    fn test_rejects_bare_sign_and_empty() {
        assert_eq!(scan("-").unwrap_err().kind, ErrorKind::UnexpectedEnd);
        assert_eq!(scan("").unwrap_err().kind, ErrorKind::UnexpectedEnd);
    }
}
