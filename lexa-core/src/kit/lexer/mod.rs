//! 扫描基础设施
//!
//! - 游标：单字符前瞻，显式 EOF 哨兵，1-based 位置
//! - 错误：带插入符的三行诊断
//! - Scanner：所有单形状自动机的公共接口

pub mod core;
pub mod error;
pub mod scanner;

pub use self::core::{Cursor, SourcePosition};
pub use error::{ErrorKind, ScanError};
pub use scanner::{
    is_digit, is_identifier_continue, is_letter, CharClass, ScanResult, Scanned, Scanner,
};
