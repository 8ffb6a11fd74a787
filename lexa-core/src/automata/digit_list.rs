//! 数字列表：以单个空格分隔的一位数字

use crate::kit::lexer::{is_digit, Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct DigitListScanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Digit,
    Space,
}

impl Scanner for DigitListScanner {
    type Output = Vec<u32>;
    const SHAPE: Shape = Shape::DigitList;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<Vec<u32>> {
        let mut digits = Vec::new();
        let mut expect = Expect::Digit;

        loop {
            cursor.advance();
            match (expect, cursor.current()) {
                (Expect::Digit, Some(c)) if is_digit(c) => {
                    let Some(digit) = c.to_digit(10) else {
                        return Err(cursor.fail());
                    };
                    digits.push(digit);
                    expect = Expect::Space;
                }
                (Expect::Space, Some(' ')) => expect = Expect::Digit,
                (Expect::Space, None) => break,
                _ => return Err(cursor.fail()),
            }
        }

        Ok(digits)
    }
}
