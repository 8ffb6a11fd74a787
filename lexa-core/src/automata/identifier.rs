//! 标识符：字母开头，后接字母、数字或 `_`

use crate::kit::lexer::scanner::take_while;
use crate::kit::lexer::{is_identifier_continue, is_letter, Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierScanner;

impl Scanner for IdentifierScanner {
    type Output = String;
    const SHAPE: Shape = Shape::Identifier;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<String> {
        cursor.advance();
        let ident = take_identifier(cursor)?;
        cursor.expect_end()?;
        Ok(ident)
    }
}

/// 从当前字符开始读一个标识符，停在第一个非标识符字符上
pub(crate) fn take_identifier(cursor: &mut Cursor<'_>) -> ScanResult<String> {
    let mut ident = String::new();
    match cursor.current() {
        Some(c) if is_letter(c) => {
            ident.push(c);
            cursor.advance();
        }
        _ => return Err(cursor.fail()),
    }
    take_while(cursor, &mut ident, is_identifier_continue);
    Ok(ident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::ErrorKind;

    fn scan(input: &str) -> ScanResult<String> {
        IdentifierScanner.scan_str(input).map(|s| s.value)
    }

    #[test]
    fn test_accepts() {
        assert_eq!(scan("abc123"), Ok("abc123".to_string()));
        assert_eq!(scan("a_b_"), Ok("a_b_".to_string()));
        assert_eq!(scan("x"), Ok("x".to_string()));
        assert_eq!(scan("привет1"), Ok("привет1".to_string()));
    }

    #[test]
    fn test_first_char_must_be_letter() {
        assert_eq!(scan("1abc").unwrap_err().kind, ErrorKind::InvalidChar('1'));
        assert_eq!(scan("_abc").unwrap_err().kind, ErrorKind::InvalidChar('_'));
        assert_eq!(scan("").unwrap_err().kind, ErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_rejects_trailing_content() {
        let err = scan("ab-c").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChar('-'));
        assert_eq!(err.index(), 3);
    }
}
