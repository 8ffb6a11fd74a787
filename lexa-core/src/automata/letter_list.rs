//! 字母列表：以 `,` 或 `;` 分隔的单个字母
//!
//! 结果只保留字母，分隔符丢弃。

use crate::kit::lexer::{is_letter, Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct LetterListScanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Letter,
    Separator,
}

impl Scanner for LetterListScanner {
    type Output = Vec<char>;
    const SHAPE: Shape = Shape::LetterList;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<Vec<char>> {
        let mut letters = Vec::new();
        let mut expect = Expect::Letter;

        loop {
            cursor.advance();
            match (expect, cursor.current()) {
                (Expect::Letter, Some(c)) if is_letter(c) => {
                    letters.push(c);
                    expect = Expect::Separator;
                }
                (Expect::Separator, Some(',' | ';')) => expect = Expect::Letter,
                // 只能在字母之后结束
                (Expect::Separator, None) => break,
                _ => return Err(cursor.fail()),
            }
        }

        Ok(letters)
    }
}
