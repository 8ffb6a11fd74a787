//! 点分标识符链：`a.b1.c_d`

use super::identifier::take_identifier;
use crate::kit::lexer::{Cursor, ScanResult, Scanner};
use lexa_config::Shape;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentChainScanner;

impl Scanner for IdentChainScanner {
    type Output = Vec<String>;
    const SHAPE: Shape = Shape::IdentChain;

    fn scan(&self, cursor: &mut Cursor<'_>) -> ScanResult<Vec<String>> {
        let mut segments = Vec::new();
        cursor.advance();

        loop {
            segments.push(take_identifier(cursor)?);
            if !cursor.check('.') {
                break;
            }
            cursor.advance();
        }

        cursor.expect_end()?;
        Ok(segments)
    }
}
