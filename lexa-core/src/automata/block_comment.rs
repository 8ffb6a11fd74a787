//! 块注释：`/* ... */`，结果保留定界符
//!
//! 结束判断依赖前一个主体字符，所以 `/*/` 不算闭合。

use crate::kit::lexer::{Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCommentScanner;

impl Scanner for BlockCommentScanner {
    type Output = String;
    const SHAPE: Shape = Shape::BlockComment;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<String> {
        let mut text = String::new();

        for opener in ['/', '*'] {
            cursor.advance();
            if !cursor.check(opener) {
                return Err(cursor.fail());
            }
            text.push(opener);
        }

        // 开头的 `*` 不参与闭合
        let mut prev = None;
        loop {
            let Some(c) = cursor.advance() else {
                return Err(cursor.fail());
            };
            text.push(c);
            if prev == Some('*') && c == '/' {
                break;
            }
            prev = Some(c);
        }

        cursor.advance();
        cursor.expect_end()?;
        Ok(text)
    }
}
