//! 十进制数：`[0-9]+(\.[0-9]+)?`
//!
//! 无符号；不带小数部分的整数同样接受。

use crate::kit::lexer::scanner::take_while;
use crate::kit::lexer::{is_digit, Cursor, ErrorKind, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalScanner;

impl Scanner for DecimalScanner {
    type Output = f64;
    const SHAPE: Shape = Shape::Decimal;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<f64> {
        let mut text = String::new();
        cursor.advance();

        if !cursor.check_with(is_digit) {
            return Err(cursor.fail());
        }
        take_while(cursor, &mut text, is_digit);

        if cursor.check('.') {
            text.push('.');
            cursor.advance();
            if !cursor.check_with(is_digit) {
                return Err(cursor.fail());
            }
            take_while(cursor, &mut text, is_digit);
        }

        cursor.expect_end()?;
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(cursor.fail_with(ErrorKind::OutOfRange(text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> ScanResult<f64> {
        DecimalScanner.scan_str(input).map(|s| s.value)
    }

    #[test]
    fn test_accepts() {
        assert_eq!(scan("123"), Ok(123.0));
        assert_eq!(scan("123.4"), Ok(123.4));
        assert_eq!(scan("0.25"), Ok(0.25));
    }

    #[test]
    fn test_fraction_needs_digits() {
        let err = scan("123.").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedEnd);
        assert_eq!(err.index(), 5);

        assert_eq!(scan("1.x").unwrap_err().kind, ErrorKind::InvalidChar('x'));
    }

    #[test]
    fn test_integer_part_needed() {
        assert_eq!(scan(".").unwrap_err().kind, ErrorKind::InvalidChar('.'));
        assert_eq!(scan(".5").unwrap_err().kind, ErrorKind::InvalidChar('.'));
        assert_eq!(scan("").unwrap_err().kind, ErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_rejects_sign_and_second_point() {
        assert_eq!(scan("-1").unwrap_err().kind, ErrorKind::InvalidChar('-'));
        assert_eq!(scan("1.2.3").unwrap_err().kind, ErrorKind::InvalidChar('.'));
    }

    #[test]
    fn test_overflow() {
        let huge = "9".repeat(400);
        let err = scan(&huge).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::OutOfRange(_)));
    }
}
