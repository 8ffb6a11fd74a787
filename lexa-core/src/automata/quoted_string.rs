//! 单引号字符串，结果保留两侧引号
//!
//! 不支持转义；第一个 `'` 即结束。

use crate::kit::lexer::{Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedStringScanner;

impl Scanner for QuotedStringScanner {
    type Output = String;
    const SHAPE: Shape = Shape::QuotedString;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<String> {
        let mut text = String::new();
        cursor.advance();

        if !cursor.check('\'') {
            return Err(cursor.fail());
        }
        text.push('\'');

        loop {
            match cursor.advance() {
                Some('\'') => break,
                Some(c) => text.push(c),
                None => return Err(cursor.fail()),
            }
        }
        text.push('\'');

        cursor.advance();
        cursor.expect_end()?;
        Ok(text)
    }
}
