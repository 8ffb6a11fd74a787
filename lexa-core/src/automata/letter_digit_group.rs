//! 字母数字分组交替
//!
//! 回看最近两个已接受字符：三个连续字符不能属于同一类，
//! 即每组字母或数字最多两个，例如 `ab12c3`。

use crate::kit::lexer::{is_letter, CharClass, Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct LetterDigitGroupScanner;

impl Scanner for LetterDigitGroupScanner {
    type Output = String;
    const SHAPE: Shape = Shape::LetterDigitGroup;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<String> {
        let mut text = String::new();
        cursor.advance();

        match cursor.current() {
            Some(c) if is_letter(c) => text.push(c),
            _ => return Err(cursor.fail()),
        }
        // [倒数第二个, 最后一个]
        let mut window = [None, Some(CharClass::Letter)];
        cursor.advance();

        while let Some(c) = cursor.current() {
            let class = CharClass::of(c);
            if class == CharClass::Other || window == [Some(class), Some(class)] {
                return Err(cursor.fail());
            }
            text.push(c);
            window = [window[1], Some(class)];
            cursor.advance();
        }

        cursor.expect_end()?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::ErrorKind;

    fn scan(input: &str) -> ScanResult<String> {
        LetterDigitGroupScanner.scan_str(input).map(|s| s.value)
    }

    #[test]
    fn test_accepts_groups_of_two() {
        for input in ["a", "ab", "a1", "ab12", "a12b", "ab1cd2", "a1b2"] {
            assert_eq!(scan(input), Ok(input.to_string()), "input {input:?}");
        }
    }

    #[test]
    fn test_rejects_three_in_a_row() {
        let err = scan("abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChar('c'));
        assert_eq!(err.index(), 3);

        assert_eq!(scan("a123").unwrap_err().kind, ErrorKind::InvalidChar('3'));
        assert!(scan("ab11c22d").is_ok());
        assert!(scan("ab111").is_err());
    }

    #[test]
    fn test_must_start_with_letter() {
        assert_eq!(scan("1a").unwrap_err().kind, ErrorKind::InvalidChar('1'));
        assert_eq!(scan("").unwrap_err().kind, ErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_rejects_other_chars() {
        assert_eq!(scan("a-").unwrap_err().kind, ErrorKind::InvalidChar('-'));
    }
}
