//! 字母数字严格交替：`a1b2c`

use crate::kit::lexer::{is_letter, CharClass, Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct LetterDigitScanner;

impl Scanner for LetterDigitScanner {
    type Output = String;
    const SHAPE: Shape = Shape::LetterDigit;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<String> {
        let mut text = String::new();
        cursor.advance();

        match cursor.current() {
            Some(c) if is_letter(c) => text.push(c),
            _ => return Err(cursor.fail()),
        }
        let mut prev = CharClass::Letter;
        cursor.advance();

        while let Some(c) = cursor.current() {
            let class = CharClass::of(c);
            if class == CharClass::Other || class == prev {
                return Err(cursor.fail());
            }
            text.push(c);
            prev = class;
            cursor.advance();
        }

        cursor.expect_end()?;
        Ok(text)
    }
}
