//! 单形状自动机
//!
//! 每个自动机是零大小的单元结构体，实现 [`Scanner`](crate::kit::lexer::Scanner)。
//! 同一形状总是从新建的游标开始，结束时必须恰好读到 EOF。

mod block_comment;
mod decimal;
mod digit_list;
mod ident_chain;
mod identifier;
mod integer;
mod letter_digit;
mod letter_digit_group;
mod letter_list;
mod nonzero_integer;
mod quoted_string;

pub use block_comment::BlockCommentScanner;
pub use decimal::DecimalScanner;
pub use digit_list::DigitListScanner;
pub use ident_chain::IdentChainScanner;
pub use identifier::IdentifierScanner;
pub use integer::IntegerScanner;
pub use letter_digit::LetterDigitScanner;
pub use letter_digit_group::LetterDigitGroupScanner;
pub use letter_list::LetterListScanner;
pub use nonzero_integer::NonzeroIntegerScanner;
pub use quoted_string::QuotedStringScanner;
